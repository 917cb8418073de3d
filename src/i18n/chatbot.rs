use serde::Serialize;

use crate::models::language::{Language, Localized};

#[derive(Debug, Serialize)]
pub struct ChatbotStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub send: &'static str,
    pub listening: &'static str,
    pub speaking: &'static str,
    pub clear: &'static str,
    pub close: &'static str,
    pub try_asking: &'static str,
    pub sample_questions: [&'static str; 4],
}

pub const WELCOME_MESSAGE: Localized = Localized::new(
    "Hello! I'm your AI Job Assistant. I can help you with:\n\n• Finding relevant government jobs\n• Application procedures and deadlines\n• Eligibility criteria\n• Exam patterns and preparation tips\n• Career guidance\n\nHow can I assist you today?",
    "नमस्ते! मैं आपका AI नौकरी सहायक हूँ। मैं आपकी मदद कर सकता हूँ:\n\n• प्रासंगिक सरकारी नौकरियों को खोजने में\n• आवेदन प्रक्रिया और समय सीमा\n• योग्यता मानदंड\n• परीक्षा पैटर्न और तैयारी के टिप्स\n• करियर मार्गदर्शन\n\nआज मैं आपकी कैसे सहायता कर सकता हूँ?",
    "హలో! నేను మీ AI ఉద్యోగ సహాయకుడిని. నేను మీకు సహాయం చేయగలను:\n\n• సంబంధిత ప్రభుత్వ ఉద్యోగాలను కనుగొనడంలో\n• దరఖాస్తు విధానాలు మరియు గడువులు\n• అర్హత ప్రమాణాలు\n• పరీక్ష నమూనాలు మరియు తయారీ చిట్కాలు\n• కెరీర్ మార్గదర్శనం\n\nఈరోజు నేను మీకు ఎలా సహాయం చేయగలను?",
);

pub const ERROR_REPLY: Localized = Localized::new(
    "Sorry, I encountered an error. Please try again.",
    "क्षमा करें, मुझे एक त्रुटि का सामना करना पड़ा। कृपया पुनः प्रयास करें।",
    "క్షమించండి, నేను లోపాన్ని ఎదుర్కొన్నాను. దయచేసి మళ్లీ ప్రయత్నించండి।",
);

const EN: ChatbotStrings = ChatbotStrings {
    title: "AI Job Assistant",
    subtitle: "Ask me about government jobs, applications, and career guidance",
    placeholder: "Ask about jobs, eligibility, application process...",
    send: "Send",
    listening: "Listening...",
    speaking: "Speaking...",
    clear: "Clear Chat",
    close: "Close",
    try_asking: "Try asking:",
    sample_questions: [
        "Show me latest bank jobs",
        "What is the eligibility for SSC CGL?",
        "How to prepare for railway exams?",
        "Tell me about teaching job vacancies",
    ],
};

const HI: ChatbotStrings = ChatbotStrings {
    title: "AI नौकरी सहायक",
    subtitle: "सरकारी नौकरियों, आवेदन और करियर मार्गदर्शन के बारे में पूछें",
    placeholder: "नौकरियों, योग्यता, आवेदन प्रक्रिया के बारे में पूछें...",
    send: "भेजें",
    listening: "सुन रहा है...",
    speaking: "बोल रहा है...",
    clear: "चैट साफ़ करें",
    close: "बंद करें",
    try_asking: "पूछकर देखें:",
    sample_questions: [
        "नवीनतम बैंक नौकरियां दिखाएं",
        "SSC CGL के लिए योग्यता क्या है?",
        "रेलवे परीक्षा की तैयारी कैसे करें?",
        "शिक्षक नौकरी की रिक्तियों के बारे में बताएं",
    ],
};

const TE: ChatbotStrings = ChatbotStrings {
    title: "AI ఉద్యోగ సహాయకుడు",
    subtitle: "ప్రభుత్వ ఉద్యోగాలు, దరఖాస్తులు మరియు కెరీర్ మార్గదర్శనం గురించి అడగండి",
    placeholder: "ఉద్యోగాలు, అర్హత, దరఖాస్తు ప్రక్రియ గురించి అడగండి...",
    send: "పంపండి",
    listening: "వింటోంది...",
    speaking: "మాట్లాడుతోంది...",
    clear: "చాట్ క్లియర్ చేయండి",
    close: "మూసివేయండి",
    try_asking: "ఇలా అడిగి చూడండి:",
    sample_questions: [
        "తాజా బ్యాంక్ ఉద్యోగాలను చూపించండి",
        "SSC CGL కోసం అర్హత ఏమిటి?",
        "రైల్వే పరీక్షలకు ఎలా సిద్ధం కావాలి?",
        "బోధనా ఉద్యోగ ఖాళీల గురించి చెప్పండి",
    ],
};

pub fn strings(lang: Language) -> &'static ChatbotStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Te => &TE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_and_error_exist_in_every_language() {
        assert!(WELCOME_MESSAGE.is_complete());
        assert!(ERROR_REPLY.is_complete());
    }

    #[test]
    fn every_language_has_four_sample_questions() {
        for lang in Language::ALL {
            let t = strings(lang);
            assert!(!t.title.is_empty());
            assert!(t.sample_questions.iter().all(|q| !q.trim().is_empty()));
        }
    }
}

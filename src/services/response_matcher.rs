use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::models::language::{Language, Localized};

/// A canned reply and the substrings that select it. Keywords are compared
/// against the lowercased message.
pub struct KeywordGroup {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: Localized,
}

/// Checked in order; the first group with a matching keyword wins.
pub static KEYWORD_GROUPS: [KeywordGroup; 2] = [
    KeywordGroup {
        topic: "bank",
        keywords: &["bank", "बैंक", "బ్యాంక్"],
        reply: Localized::new(
            "I found several banking job opportunities for you:\n\n🏦 **IBPS PO 2025** - 5,208 posts\n• Eligibility: Graduate\n• Age: 20-30 years\n• Deadline: March 15, 2025\n\n🏦 **Bank of Baroda LBO** - 2,500 posts\n• Eligibility: Graduate\n• Age: 20-28 years\n• Deadline: February 28, 2025\n\nWould you like more details about any specific position?",
            "मैंने आपके लिए कई बैंकिंग नौकरी के अवसर पाए हैं:\n\n🏦 **आईबीपीएस पीओ 2025** - 5,208 पद\n• योग्यता: स्नातक\n• आयु: 20-30 वर्ष\n• अंतिम तिथि: 15 मार्च 2025\n\n🏦 **बैंक ऑफ बड़ौदा एलबीओ** - 2,500 पद\n• योग्यता: स्नातक\n• आयु: 20-28 वर्ष\n• अंतिम तिथि: 28 फरवरी 2025\n\nक्या आप किसी विशिष्ट पद के बारे में और जानकारी चाहेंगे?",
            "నేను మీ కోసం అనేక బ్యాంకింగ్ ఉద్యోగ అవకాశాలను కనుగొన్నాను:\n\n🏦 **IBPS PO 2025** - 5,208 పోస్టులు\n• అర్హత: గ్రాడ్యుయేట్\n• వయస్సు: 20-30 సంవత్సరాలు\n• గడువు: మార్చి 15, 2025\n\n🏦 **బ్యాంక్ ఆఫ్ బరోడా LBO** - 2,500 పోస్టులు\n• అర్హత: గ్రాడ్యుయేట్\n• వయస్సు: 20-28 సంవత్సరాలు\n• గడువు: ఫిబ్రవరి 28, 2025\n\nమీరు ఏదైనా నిర్దిష్ట స్థానం గురించి మరిన్ని వివరాలు కావాలా?",
        ),
    },
    KeywordGroup {
        topic: "railway",
        keywords: &["railway", "रेलवे", "రైల్వే"],
        reply: Localized::new(
            "Here are the latest Railway job opportunities:\n\n🚆 **RRB Technician 2025** - 6,238 posts\n• Eligibility: ITI/Diploma\n• Age: 18-28 years\n• Deadline: April 10, 2025\n\n🚆 **Railway Group D** - Expected soon\n• Eligibility: 10th Pass\n• Age: 18-33 years\n\n**Preparation Tips:**\n• Focus on General Awareness\n• Practice Mathematics daily\n• Study Railway-specific topics\n\nWould you like exam pattern details?",
            "यहाँ नवीनतम रेलवे नौकरी के अवसर हैं:\n\n🚆 **आरआरबी तकनीशियन 2025** - 6,238 पद\n• योग्यता: आईटीआई/डिप्लोमा\n• आयु: 18-28 वर्ष\n• अंतिम तिथि: 10 अप्रैल 2025\n\n🚆 **रेलवे ग्रुप डी** - जल्द ही अपेक्षित\n• योग्यता: 10वीं पास\n• आयु: 18-33 वर्ष\n\n**तैयारी के टिप्स:**\n• सामान्य जागरूकता पर फोकस करें\n• गणित का दैनिक अभ्यास करें\n• रेलवे-विशिष्ट विषयों का अध्ययन करें\n\nक्या आप परीक्षा पैटर्न का विवरण चाहेंगे?",
            "ఇక్కడ తాజా రైల్వే ఉద్యోగ అవకాశాలు ఉన్నాయి:\n\n🚆 **RRB టెక్నీషియన్ 2025** - 6,238 పోస్టులు\n• అర్హత: ITI/డిప్లొమా\n• వయస్సు: 18-28 సంవత్సరాలు\n• గడువు: ఏప్రిల్ 10, 2025\n\n🚆 **రైల్వే గ్రూప్ D** - త్వరలో ఆశించబడుతోంది\n• అర్హత: 10వ తరగతి ఉత్తీర్ణత\n• వయస్సు: 18-33 సంవత్సరాలు\n\n**తయారీ చిట్కాలు:**\n• సాధారణ అవగాహనపై దృష్టి పెట్టండి\n• రోజూ గణితం అభ్యసించండి\n• రైల్వే-నిర్దిష్ట విషయాలను అధ్యయనం చేయండి\n\nమీరు పరీక్ష నమూనా వివరాలు కావాలా?",
        ),
    },
];

pub const DEFAULT_REPLY: Localized = Localized::new(
    "Thank you for your question! I'm here to help with government job information. You can ask me about:\n\n• Job notifications and deadlines\n• Eligibility criteria\n• Application procedures\n• Exam patterns and syllabus\n• Career guidance\n\nPlease feel free to ask anything specific about government jobs!",
    "आपके प्रश्न के लिए धन्यवाद! मैं सरकारी नौकरी की जानकारी में मदद के लिए यहाँ हूँ। आप मुझसे पूछ सकते हैं:\n\n• नौकरी अधिसूचना और समय सीमा\n• योग्यता मानदंड\n• आवेदन प्रक्रिया\n• परीक्षा पैटर्न और पाठ्यक्रम\n• करियर मार्गदर्शन\n\nकृपया सरकारी नौकरियों के बारे में कुछ भी विशिष्ट पूछने में संकोच न करें!",
    "మీ ప్రశ్నకు ధన్యవాదాలు! నేను ప్రభుత్వ ఉద్యోగ సమాచారంతో సహాయం చేయడానికి ఇక్కడ ఉన్నాను. మీరు నన్ను అడగవచ్చు:\n\n• ఉద్యోగ నోటిఫికేషన్లు మరియు గడువులు\n• అర్హత ప్రమాణాలు\n• దరఖాస్తు విధానాలు\n• పరీక్ష నమూనాలు మరియు సిలబస్\n• కెరీర్ మార్గదర్శనం\n\nప్రభుత్వ ఉద్యోగాల గురించి ఏదైనా నిర్దిష్టంగా అడగడానికి సంకోచించకండి!",
);

/// Finds the group the message belongs to, if any.
pub fn match_group(message: &str) -> Option<&'static KeywordGroup> {
    let lowered = message.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|group| group.keywords.iter().any(|k| lowered.contains(k)))
}

pub fn match_reply(message: &str, lang: Language) -> &'static str {
    match_group(message)
        .map(|group| &group.reply)
        .unwrap_or(&DEFAULT_REPLY)
        .get(lang)
}

/// Source of the simulated "thinking" pause before a reply.
#[cfg_attr(test, mockall::automock)]
pub trait ThinkingDelay: Send + Sync {
    fn next_delay(&self) -> Duration;
}

/// Uniform delay in `[min, max)`.
#[derive(Debug, Clone)]
pub struct RandomDelay {
    min: Duration,
    max: Duration,
}

impl RandomDelay {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }
}

impl ThinkingDelay for RandomDelay {
    fn next_delay(&self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let millis = rand::thread_rng().gen_range(self.min.as_millis()..self.max.as_millis());
        Duration::from_millis(millis as u64)
    }
}

#[derive(Clone)]
pub struct ResponseMatcher {
    delay: Arc<dyn ThinkingDelay>,
}

impl ResponseMatcher {
    pub fn new(delay: Arc<dyn ThinkingDelay>) -> Self {
        Self { delay }
    }

    pub fn with_bounds(min: Duration, max: Duration) -> Self {
        Self::new(Arc::new(RandomDelay::new(min, max)))
    }

    /// Waits out the thinking delay, then picks the canned reply in `lang`.
    pub async fn respond(&self, message: &str, lang: Language) -> String {
        let delay = self.delay.next_delay();
        let topic = match_group(message).map(|g| g.topic).unwrap_or("default");
        tracing::debug!(topic, ?delay, lang = %lang, "preparing chat reply");
        tokio::time::sleep(delay).await;
        match_reply(message, lang).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn bank_wins_over_railway() {
        let reply = match_reply("bank or railway?", Language::En);
        assert!(reply.contains("IBPS PO 2025"));
        assert_eq!(match_group("railway bank").map(|g| g.topic), Some("bank"));
    }

    #[test]
    fn native_script_keywords_match() {
        assert!(match_reply("रेलवे नौकरी", Language::Hi).contains("आरआरबी तकनीशियन 2025"));
        assert_eq!(match_group("बैंक की नौकरियां").map(|g| g.topic), Some("bank"));
        assert_eq!(match_group("బ్యాంక్ ఉద్యోగాలు").map(|g| g.topic), Some("bank"));
        assert_eq!(match_group("రైల్వే").map(|g| g.topic), Some("railway"));
    }

    #[test]
    fn every_reply_is_translated() {
        for group in KEYWORD_GROUPS.iter() {
            assert!(group.reply.is_complete(), "{} reply missing a translation", group.topic);
        }
        assert!(DEFAULT_REPLY.is_complete());
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(match_group("Show me latest BANK jobs").map(|g| g.topic), Some("bank"));
        assert_eq!(match_group("RaIlWaY exams").map(|g| g.topic), Some("railway"));
    }

    #[test]
    fn unmatched_falls_back_to_default() {
        assert!(match_group("What is the eligibility for SSC CGL?").is_none());
        assert_eq!(match_reply("hello", Language::Te), DEFAULT_REPLY.te);
        assert!(match_reply("hello", Language::En).starts_with("Thank you for your question!"));
    }

    #[test]
    fn reply_language_follows_argument() {
        let group = &KEYWORD_GROUPS[0];
        for lang in Language::ALL {
            assert_eq!(match_reply("bank", lang), group.reply.get(lang));
        }
    }

    #[test]
    fn random_delay_stays_in_bounds() {
        let delay = RandomDelay::new(Duration::from_millis(1000), Duration::from_millis(3000));
        for _ in 0..200 {
            let d = delay.next_delay();
            assert!(d >= Duration::from_millis(1000) && d < Duration::from_millis(3000));
        }
    }

    #[test]
    fn degenerate_bounds_use_min() {
        let delay = RandomDelay::new(Duration::from_millis(5), Duration::from_millis(5));
        assert_eq!(delay.next_delay(), Duration::from_millis(5));
    }

    #[tokio::test]
    async fn respond_consults_delay_once() {
        let mut mock = MockThinkingDelay::new();
        mock.expect_next_delay()
            .times(1)
            .returning(|| Duration::ZERO);
        let matcher = ResponseMatcher::new(Arc::new(mock));

        let reply = matcher.respond("railway", Language::En).await;
        assert!(reply.contains("RRB Technician 2025"));
    }

    #[tokio::test(start_paused = true)]
    async fn respond_waits_between_one_and_three_seconds() {
        let matcher =
            ResponseMatcher::with_bounds(Duration::from_millis(1000), Duration::from_millis(3000));
        let started = Instant::now();
        let reply = matcher.respond("anything", Language::En).await;
        let elapsed = started.elapsed();

        assert_eq!(reply, DEFAULT_REPLY.en);
        assert!(elapsed >= Duration::from_millis(1000));
        assert!(elapsed < Duration::from_millis(3000));
    }
}

use serde::Serialize;

use crate::models::language::Language;

#[derive(Debug, Serialize)]
pub struct HomeStrings {
    pub latest_updates: &'static str,
    pub new_updates: &'static str,
    pub view_all: &'static str,
    pub career_guidance: &'static str,
    pub career_subtitle: &'static str,
    pub chat_with_ai: &'static str,
    pub explore_jobs: &'static str,
    pub quick_stats: &'static str,
    pub total_jobs: &'static str,
    pub new_today: &'static str,
    pub trending: &'static str,
    pub last_updated: &'static str,
    pub minutes: &'static str,
}

const EN: HomeStrings = HomeStrings {
    latest_updates: "Latest Job Updates",
    new_updates: "New Updates",
    view_all: "View All",
    career_guidance: "Get Career Guidance with AI Assistant",
    career_subtitle: "Smart job recommendations and personalized career advice",
    chat_with_ai: "Chat with AI",
    explore_jobs: "Explore Jobs",
    quick_stats: "Quick Stats",
    total_jobs: "Total Active Jobs",
    new_today: "New Today",
    trending: "Trending",
    last_updated: "Last Updated",
    minutes: "minutes ago",
};

const HI: HomeStrings = HomeStrings {
    latest_updates: "नवीनतम नौकरी अपडेट",
    new_updates: "नए अपडेट",
    view_all: "सभी देखें",
    career_guidance: "AI सहायक के साथ करियर मार्गदर्शन प्राप्त करें",
    career_subtitle: "स्मार्ट नौकरी सिफारिशें और व्यक्तिगत करियर सलाह",
    chat_with_ai: "AI के साथ चैट करें",
    explore_jobs: "नौकरियों का अन्वेषण करें",
    quick_stats: "त्वरित आंकड़े",
    total_jobs: "कुल सक्रिय नौकरियां",
    new_today: "आज नई",
    trending: "ट्रेंडिंग",
    last_updated: "अंतिम अपडेट",
    minutes: "मिनट पहले",
};

const TE: HomeStrings = HomeStrings {
    latest_updates: "తాజా ఉద్యోగ అప్‌డేట్‌లు",
    new_updates: "కొత్త అప్‌డేట్‌లు",
    view_all: "అన్నింటినీ చూడండి",
    career_guidance: "AI సహాయకుడితో కెరీర్ మార్గదర్శనం పొందండి",
    career_subtitle: "స్మార్ట్ ఉద్యోగ సిఫార్సులు మరియు వ్యక్తిగత కెరీర్ సలహా",
    chat_with_ai: "AIతో చాట్ చేయండి",
    explore_jobs: "ఉద్యోగాలను అన్వేషించండి",
    quick_stats: "క్విక్ స్టాట్స్",
    total_jobs: "మొత్తం క్రియాశీల ఉద్యోగాలు",
    new_today: "ఈరోజు కొత్త",
    trending: "ట్రెండింగ్",
    last_updated: "చివరిగా అప్‌డేట్ చేయబడింది",
    minutes: "నిమిషాల క్రితం",
};

pub fn strings(lang: Language) -> &'static HomeStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Te => &TE,
    }
}

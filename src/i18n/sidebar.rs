use serde::Serialize;

use crate::models::language::Language;

#[derive(Debug, Serialize)]
pub struct SidebarStrings {
    pub notifications: &'static str,
    pub education: &'static str,
    pub trending: &'static str,
    pub popular: &'static str,
    pub new: &'static str,
    pub whatsapp_title: &'static str,
    pub whatsapp_subtitle: &'static str,
    pub whatsapp_join: &'static str,
}

const EN: SidebarStrings = SidebarStrings {
    notifications: "Notifications",
    education: "EDUCATION",
    trending: "Trending Now",
    popular: "Popular Today",
    new: "New",
    whatsapp_title: "Join WhatsApp Channel",
    whatsapp_subtitle: "Get instant job alerts",
    whatsapp_join: "Join Now",
};

const HI: SidebarStrings = SidebarStrings {
    notifications: "सूचनाएं",
    education: "शिक्षा",
    trending: "ट्रेंडिंग",
    popular: "आज लोकप्रिय",
    new: "नया",
    whatsapp_title: "व्हाट्सऐप चैनल जॉइन करें",
    whatsapp_subtitle: "तुरंत नौकरी अलर्ट पाएं",
    whatsapp_join: "अभी जुड़ें",
};

const TE: SidebarStrings = SidebarStrings {
    notifications: "నోటిఫికేషన్లు",
    education: "విద్య",
    trending: "ట్రెండింగ్",
    popular: "ఈరోజు ప్రసిద్ధ",
    new: "కొత్త",
    whatsapp_title: "వాట్సాప్ ఛానెల్‌లో చేరండి",
    whatsapp_subtitle: "తక్షణ ఉద్యోగ హెచ్చరికలు పొందండి",
    whatsapp_join: "ఇప్పుడే చేరండి",
};

pub fn strings(lang: Language) -> &'static SidebarStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Te => &TE,
    }
}

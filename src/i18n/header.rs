use serde::Serialize;

use crate::models::language::Language;

#[derive(Debug, Serialize)]
pub struct HeaderStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub download_app: &'static str,
    pub join_whatsapp: &'static str,
    pub ai_assistant: &'static str,
    pub latest_notifications: &'static str,
    pub warning_text: &'static str,
}

const EN: HeaderStrings = HeaderStrings {
    title: "Job Wiz Hub",
    subtitle: "Government Jobs | Results | Admit Cards",
    download_app: "Download Mobile APP",
    join_whatsapp: "JOIN WHATSAPP CHANNEL",
    ai_assistant: "AI Assistant",
    latest_notifications: "Latest Notifications",
    warning_text: "Dear Job Wiz Hub users always type .Com after JobWizHub. Beware of duplicate websites with Job Wiz Hub name.",
};

const HI: HeaderStrings = HeaderStrings {
    title: "जॉब विज़ हब",
    subtitle: "सरकारी नौकरियां | परिणाम | प्रवेश पत्र",
    download_app: "मोबाइल ऐप डाउनलोड करें",
    join_whatsapp: "व्हाट्सऐप चैनल जॉइन करें",
    ai_assistant: "AI सहायक",
    latest_notifications: "नवीनतम सूचनाएं",
    warning_text: "प्रिय जॉब विज़ हब उपयोगकर्ता हमेशा JobWizHub के बाद .Com टाइप करें। Job Wiz Hub नाम की डुप्लिकेट वेबसाइटों से सावधान रहें।",
};

const TE: HeaderStrings = HeaderStrings {
    title: "జాబ్ విజ్ హబ్",
    subtitle: "ప్రభుత్వ ఉద్యోగాలు | ఫలితాలు | అడ్మిట్ కార్డులు",
    download_app: "మొబైల్ యాప్ డౌన్‌లోడ్ చేయండి",
    join_whatsapp: "వాట్సాప్ ఛానెల్‌లో చేరండి",
    ai_assistant: "AI సహాయకుడు",
    latest_notifications: "తాజా నోటిఫికేషన్లు",
    warning_text: "ప్రియమైన జాబ్ విజ్ హబ్ వినియోగదారులు ఎల్లప్పుడూ JobWizHub తర్వాత .Com టైప్ చేయండి. Job Wiz Hub పేరుతో నకిలీ వెబ్‌సైట్‌లకు జాగ్రత్త.",
};

pub fn strings(lang: Language) -> &'static HeaderStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Te => &TE,
    }
}

use serde::Serialize;

use crate::models::language::Language;

#[derive(Debug, Serialize)]
pub struct JobCardStrings {
    pub posts: &'static str,
    pub education: &'static str,
    pub deadline: &'static str,
    pub notified: &'static str,
    pub apply: &'static str,
    pub details: &'static str,
    pub bookmark: &'static str,
    pub share: &'static str,
    pub new: &'static str,
    pub hot: &'static str,
}

const EN: JobCardStrings = JobCardStrings {
    posts: "Posts",
    education: "Education",
    deadline: "Deadline",
    notified: "Notified",
    apply: "Apply Now",
    details: "View Details",
    bookmark: "Bookmark",
    share: "Share",
    new: "NEW",
    hot: "HOT",
};

const HI: JobCardStrings = JobCardStrings {
    posts: "पद",
    education: "शिक्षा",
    deadline: "अंतिम तिथि",
    notified: "सूचित",
    apply: "अभी आवेदन करें",
    details: "विवरण देखें",
    bookmark: "बुकमार्क",
    share: "साझा करें",
    new: "नया",
    hot: "हॉट",
};

const TE: JobCardStrings = JobCardStrings {
    posts: "పోస్టులు",
    education: "విద్య",
    deadline: "చివరి తేదీ",
    notified: "తెలియజేయబడింది",
    apply: "ఇప్పుడే దరఖాస్తు చేయండి",
    details: "వివరాలను చూడండి",
    bookmark: "బుక్‌మార్క్",
    share: "షేర్ చేయండి",
    new: "కొత్త",
    hot: "హాట్",
};

pub fn strings(lang: Language) -> &'static JobCardStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Te => &TE,
    }
}

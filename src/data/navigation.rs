use crate::data::categories::{EDUCATION_CATEGORIES, JOB_CATEGORIES};
use crate::models::category::{NavItem, SidebarSection};
use crate::models::language::Localized;
use crate::models::page::{ALL_STATES, HOME_CATEGORY};

const fn nav(
    key: &'static str,
    label: Localized,
    color: Option<&'static str>,
    count: Option<&'static str>,
) -> NavItem {
    NavItem {
        key,
        label,
        color,
        count,
    }
}

const fn section(
    key: &'static str,
    label: Localized,
    count: &'static str,
    is_new: bool,
    is_trending: bool,
) -> SidebarSection {
    SidebarSection {
        key,
        label,
        count,
        is_new,
        is_trending,
    }
}

pub static NAV_ITEMS: [NavItem; 9] = [
    nav(
        HOME_CATEGORY,
        Localized::new("Home", "होम", "హోమ్"),
        Some("bg-primary"),
        None,
    ),
    nav(
        "all-india-govt",
        Localized::new(
            "All India Govt Jobs",
            "अखिल भारतीय सरकारी नौकरियां",
            "అఖిల భారత ప్రభుత్వ ఉద్యోగాలు",
        ),
        Some("bg-job-bank"),
        Some("2.5K+"),
    ),
    nav(
        "state-govt",
        Localized::new(
            "State Govt Jobs",
            "राज्य सरकारी नौकरियां",
            "రాష్ట్ర ప్రభుత్వ ఉద్యోగాలు",
        ),
        Some("bg-job-railway"),
        Some("1.8K+"),
    ),
    nav(
        "bank",
        Localized::new("Bank Jobs", "बैंक नौकरियां", "బ్యాంక్ ఉద్యోగాలు"),
        Some("bg-job-bank"),
        Some("450+"),
    ),
    nav(
        "teaching",
        Localized::new("Teaching Jobs", "शिक्षण नौकरियां", "అధ్యాపన ఉద్యోగాలు"),
        Some("bg-job-teaching"),
        Some("680+"),
    ),
    nav(
        "engineering",
        Localized::new(
            "Engineering Jobs",
            "इंजीनियरिंग नौकरियां",
            "ఇంజినీరింగ్ ఉద్యోగాలు",
        ),
        Some("bg-job-engineering"),
        Some("320+"),
    ),
    nav(
        "railway",
        Localized::new("Railway Jobs", "रेलवे नौकरियां", "రైల్వే ఉద్యోగాలు"),
        Some("bg-job-railway"),
        Some("890+"),
    ),
    nav(
        "police-defence",
        Localized::new(
            "Police/Defence Jobs",
            "पुलिस/रक्षा नौकरियां",
            "పోలీస్/రక్షణ ఉద్యోగాలు",
        ),
        Some("bg-job-police"),
        Some("540+"),
    ),
    nav(
        "medical",
        Localized::new("Medical Jobs", "चिकित्सा नौकरियां", "వైద్య ఉద్యోగాలు"),
        Some("bg-job-medical"),
        Some("380+"),
    ),
];

pub static OTHER_ITEMS: [NavItem; 3] = [
    nav(
        "education",
        Localized::new("EDUCATION", "शिक्षा", "విద్య"),
        None,
        None,
    ),
    nav("games", Localized::new("Games", "गेम्स", "గేమ్స్"), None, None),
    nav(
        "download-app",
        Localized::new(
            "Download Mobile App",
            "मोबाइल ऐप डाउनलोड करें",
            "మొబైల్ యాప్ డౌన్‌లోడ్ చేయండి",
        ),
        None,
        None,
    ),
];

pub static MAIN_SECTIONS: [SidebarSection; 6] = [
    section(
        "latest-notifications",
        Localized::new("Latest Notifications", "नवीनतम सूचनाएं", "తాజా నోటిఫికేషన్లు"),
        "2.5K+",
        true,
        false,
    ),
    section(
        "employment-news",
        Localized::new("Employment News", "रोजगार समाचार", "ఉద్యోగ వార్తలు"),
        "450+",
        false,
        false,
    ),
    section(
        "search-jobs",
        Localized::new("Search Jobs", "नौकरी खोजें", "ఉద్యోగాలను వెతకండి"),
        "1.2K+",
        false,
        false,
    ),
    section(
        "sarkari-job",
        Localized::new("Sarkari Job", "सरकारी नौकरी", "సర్కారీ ఉద్యోగం"),
        "890+",
        false,
        true,
    ),
    section(
        "sarkari-naukri",
        Localized::new("Sarkari Naukri", "सरकारी नौकरी", "సర్కారీ నౌకరీ"),
        "670+",
        false,
        false,
    ),
    section(
        "anganwadi-recruitment",
        Localized::new(
            "Anganwadi Recruitment",
            "आंगनवाड़ी भर्ती",
            "అంగన్‌వాడీ రిక్రూట్‌మెంట్",
        ),
        "120+",
        false,
        false,
    ),
];

pub static EDUCATION_SECTIONS: [SidebarSection; 6] = [
    section(
        "latest-announcements",
        Localized::new("Latest Announcements", "नवीनतम घोषणाएं", "తాజా ప్రకటనలు"),
        "340+",
        false,
        false,
    ),
    section(
        "sarkari-result",
        Localized::new("Sarkari Result", "सरकारी परिणाम", "సర్కారీ రిజల్ట్"),
        "280+",
        false,
        false,
    ),
    section(
        "admit-card",
        Localized::new("Admit Card", "प्रवेश पत्र", "అడ్మిట్ కార్డ్"),
        "150+",
        false,
        false,
    ),
    section(
        "exam-results",
        Localized::new("Exam Results", "परीक्षा परिणाम", "పరీక్ష ఫలితాలు"),
        "200+",
        false,
        false,
    ),
    section(
        "answer-key",
        Localized::new("Answer Key", "उत्तर कुंजी", "అన్సర్ కీ"),
        "90+",
        false,
        false,
    ),
    section(
        "cutoff-marks",
        Localized::new("Cutoff Marks", "कटऑफ मार्क्स", "కటాఫ్ మార్కులు"),
        "110+",
        false,
        false,
    ),
];

pub fn nav_item(key: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().chain(OTHER_ITEMS.iter()).find(|i| i.key == key)
}

/// Whether `key` names something a visitor can select as the active
/// category: a nav entry, a sidebar section, a category card or "all".
pub fn is_known_category_key(key: &str) -> bool {
    key == ALL_STATES
        || nav_item(key).is_some()
        || MAIN_SECTIONS
            .iter()
            .chain(EDUCATION_SECTIONS.iter())
            .any(|s| s.key == key)
        || JOB_CATEGORIES.iter().any(|c| c.id == key)
        || EDUCATION_CATEGORIES.iter().any(|c| c.id == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_leads_and_has_no_count() {
        assert_eq!(NAV_ITEMS[0].key, HOME_CATEGORY);
        assert!(NAV_ITEMS[0].count.is_none());
        assert!(NAV_ITEMS[1..].iter().all(|i| i.count.is_some()));
    }

    #[test]
    fn every_label_is_translated() {
        let labels = NAV_ITEMS
            .iter()
            .chain(OTHER_ITEMS.iter())
            .map(|i| &i.label)
            .chain(MAIN_SECTIONS.iter().map(|s| &s.label))
            .chain(EDUCATION_SECTIONS.iter().map(|s| &s.label));
        for label in labels {
            assert!(label.is_complete(), "{} missing a translation", label.en);
        }
    }

    #[test]
    fn known_keys_cover_every_surface() {
        for key in ["home", "railway", "games", "admit-card", "defence", "iti", "all"] {
            assert!(is_known_category_key(key), "{key}");
        }
        assert!(!is_known_category_key("astronaut"));
        assert!(!is_known_category_key(""));
    }

    #[test]
    fn only_badged_sections_are_flagged() {
        let new: Vec<_> = MAIN_SECTIONS.iter().filter(|s| s.is_new).map(|s| s.key).collect();
        let trending: Vec<_> = MAIN_SECTIONS
            .iter()
            .filter(|s| s.is_trending)
            .map(|s| s.key)
            .collect();
        assert_eq!(new, ["latest-notifications"]);
        assert_eq!(trending, ["sarkari-job"]);
    }
}

use serde::Serialize;

use crate::models::language::Language;

#[derive(Debug, Serialize)]
pub struct CategoryStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub view_all: &'static str,
    pub apply: &'static str,
    pub education_title: &'static str,
    pub education_subtitle: &'static str,
    pub jobs: &'static str,
    pub new: &'static str,
    pub trending: &'static str,
}

const EN: CategoryStrings = CategoryStrings {
    title: "Popular Job Categories",
    subtitle: "Explore government job opportunities by category",
    view_all: "View All",
    apply: "Apply Now",
    education_title: "Jobs by Education Qualification",
    education_subtitle: "Find jobs based on your educational background",
    jobs: "Jobs",
    new: "New",
    trending: "Trending",
};

const HI: CategoryStrings = CategoryStrings {
    title: "लोकप्रिय नौकरी श्रेणियां",
    subtitle: "श्रेणी के आधार पर सरकारी नौकरी के अवसरों का अन्वेषण करें",
    view_all: "सभी देखें",
    apply: "अभी आवेदन करें",
    education_title: "शैक्षणिक योग्यता के आधार पर नौकरियां",
    education_subtitle: "अपनी शैक्षणिक पृष्ठभूमि के आधार पर नौकरियां खोजें",
    jobs: "नौकरियां",
    new: "नया",
    trending: "ट्रेंडिंग",
};

const TE: CategoryStrings = CategoryStrings {
    title: "ప్రసిద్ధ ఉద్యోగ వర్గాలు",
    subtitle: "వర్గం ఆధారంగా ప్రభుత్వ ఉద్యోగ అవకాశాలను అన్వేషించండి",
    view_all: "అన్నింటినీ చూడండి",
    apply: "ఇప్పుడే దరఖాస్తు చేయండి",
    education_title: "విద్యా అర్హత ఆధారంగా ఉద్యోగాలు",
    education_subtitle: "మీ విద్యా నేపథ్యం ఆధారంగా ఉద్యోగాలను కనుగొనండి",
    jobs: "ఉద్యోగాలు",
    new: "కొత్త",
    trending: "ట్రెండింగ్",
};

pub fn strings(lang: Language) -> &'static CategoryStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Te => &TE,
    }
}

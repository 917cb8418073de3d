use serde::Serialize;

use crate::models::language::Language;

#[derive(Debug, Serialize)]
pub struct StateSelectorStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub all_states: &'static str,
    pub trending: &'static str,
    pub jobs_available: &'static str,
    pub states: &'static str,
    pub total_jobs: &'static str,
}

const EN: StateSelectorStrings = StateSelectorStrings {
    title: "State-wise Government Jobs",
    subtitle: "Select your state to find local government job opportunities",
    all_states: "All States",
    trending: "Trending",
    jobs_available: "jobs available",
    states: "States",
    total_jobs: "Total Jobs",
};

const HI: StateSelectorStrings = StateSelectorStrings {
    title: "राज्यवार सरकारी नौकरियां",
    subtitle: "स्थानीय सरकारी नौकरी के अवसर खोजने के लिए अपना राज्य चुनें",
    all_states: "सभी राज्य",
    trending: "ट्रेंडिंग",
    jobs_available: "नौकरियां उपलब्ध",
    states: "राज्य",
    total_jobs: "कुल नौकरियां",
};

const TE: StateSelectorStrings = StateSelectorStrings {
    title: "రాష్ట్రవారీ ప్రభుత్వ ఉద్యోగాలు",
    subtitle: "స్థానిక ప్రభుత్వ ఉద్యోగ అవకాశాలను కనుగొనడానికి మీ రాష్ట్రాన్ని ఎంచుకోండి",
    all_states: "అన్ని రాష్ట్రాలు",
    trending: "ట్రెండింగ్",
    jobs_available: "ఉద్యోగాలు అందుబాటులో",
    states: "రాష్ట్రాలు",
    total_jobs: "మొత్తం ఉద్యోగాలు",
};

pub fn strings(lang: Language) -> &'static StateSelectorStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Te => &TE,
    }
}

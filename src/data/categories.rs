use crate::models::category::{EducationCategory, JobCategory};
use crate::models::language::Localized;

pub static JOB_CATEGORIES: [JobCategory; 6] = [
    JobCategory {
        id: "bank",
        title: Localized::new("Banking Jobs", "बैंकिंग नौकरियां", "బ్యాంకింగ్ ఉద్యోగాలు"),
        description: Localized::new(
            "IBPS, SBI, Bank PO, Clerk positions",
            "आईBPS, SBI, बैंक PO, क्लर्क पद",
            "IBPS, SBI, బ్యాంక్ PO, క్లర్క్ పోజిషన్లు",
        ),
        color: "bg-job-bank",
        image: Some("/assets/bank-jobs.jpg"),
        jobs: 1240,
        new_jobs: 89,
        trending: true,
    },
    JobCategory {
        id: "railway",
        title: Localized::new("Railway Jobs", "रेलवे नौकरियां", "రైల్వే ఉద్యోగాలు"),
        description: Localized::new(
            "RRB, Indian Railways, Group D, ALP",
            "RRB, भारतीय रेलवे, ग्रुप D, ALP",
            "RRB, ఇండియన్ రైల్వేస్, గ్రూప్ D, ALP",
        ),
        color: "bg-job-railway",
        image: Some("/assets/railway-jobs.jpg"),
        jobs: 2340,
        new_jobs: 156,
        trending: true,
    },
    JobCategory {
        id: "teaching",
        title: Localized::new("Teaching Jobs", "शिक्षण नौकरियां", "బోధనా ఉద్యోగాలు"),
        description: Localized::new(
            "CTET, TET, School Teacher, Professor",
            "CTET, TET, स्कूल शिक्षक, प्रोफेसर",
            "CTET, TET, స్కూల్ టీచర్, ప్రొఫెసర్",
        ),
        color: "bg-job-teaching",
        image: Some("/assets/teaching-jobs.jpg"),
        jobs: 890,
        new_jobs: 67,
        trending: false,
    },
    JobCategory {
        id: "medical",
        title: Localized::new("Medical Jobs", "चिकित्सा नौकरियां", "వైద్య ఉద్యోగాలు"),
        description: Localized::new(
            "AIIMS, NEET, Nursing, Healthcare",
            "AIIMS, NEET, नर्सिंग, स्वास्थ्य सेवा",
            "AIIMS, NEET, నర్సింగ్, హెల్త్‌కేర్",
        ),
        color: "bg-job-medical",
        image: None,
        jobs: 670,
        new_jobs: 45,
        trending: false,
    },
    JobCategory {
        id: "defence",
        title: Localized::new("Defence Jobs", "रक्षा नौकरियां", "రక్షణ ఉద్యోగాలు"),
        description: Localized::new(
            "Army, Navy, Air Force, Police",
            "सेना, नौसेना, वायु सेना, पुलिस",
            "ఆర్మీ, నేవీ, ఎయిర్ ఫోర్స్, పోలీస్",
        ),
        color: "bg-job-police",
        image: None,
        jobs: 1120,
        new_jobs: 78,
        trending: true,
    },
    JobCategory {
        id: "engineering",
        title: Localized::new("Engineering Jobs", "इंजीनियरिंग नौकरियां", "ఇంజినీరింగ్ ఉద్యోగాలు"),
        description: Localized::new(
            "PSU, Technical Posts, GATE",
            "PSU, तकनीकी पद, GATE",
            "PSU, టెక్నికల్ పోస్ట్‌లు, GATE",
        ),
        color: "bg-job-engineering",
        image: None,
        jobs: 780,
        new_jobs: 34,
        trending: false,
    },
];

pub static EDUCATION_CATEGORIES: [EducationCategory; 6] = [
    EducationCategory {
        id: "10th",
        title: Localized::new("10th Pass Jobs", "10वीं पास नौकरियां", "10వ తరగతి ఉద్యోగాలు"),
        jobs: 450,
    },
    EducationCategory {
        id: "12th",
        title: Localized::new("12th Pass Jobs", "12वीं पास नौकरियां", "12వ తరగతి ఉద్యోగాలు"),
        jobs: 680,
    },
    EducationCategory {
        id: "graduate",
        title: Localized::new("Graduate Jobs", "स्नातक नौकरियां", "గ్రాడ్యుయేట్ ఉద్యోగాలు"),
        jobs: 1240,
    },
    EducationCategory {
        id: "postgraduate",
        title: Localized::new(
            "Post Graduate Jobs",
            "स्नातकोत्तर नौकरियां",
            "పోస్ట్ గ్రాడ్యుయేట్ ఉద్యోగాలు",
        ),
        jobs: 340,
    },
    EducationCategory {
        id: "diploma",
        title: Localized::new("Diploma Jobs", "डिप्लोमा नौकरियां", "డిప్లొమా ఉద్యోగాలు"),
        jobs: 290,
    },
    EducationCategory {
        id: "iti",
        title: Localized::new("ITI Jobs", "ITI नौकरियां", "ITI ఉద్యోగాలు"),
        jobs: 560,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_of_each() {
        assert_eq!(JOB_CATEGORIES.len(), 6);
        assert_eq!(EDUCATION_CATEGORIES.len(), 6);
    }

    #[test]
    fn new_jobs_never_exceed_total() {
        for c in JOB_CATEGORIES.iter() {
            assert!(c.new_jobs <= c.jobs, "{}", c.id);
            assert!(c.title.is_complete() && c.description.is_complete());
        }
    }

    #[test]
    fn trending_categories() {
        let trending: Vec<_> = JOB_CATEGORIES
            .iter()
            .filter(|c| c.trending)
            .map(|c| c.id)
            .collect();
        assert_eq!(trending, ["bank", "railway", "defence"]);
    }
}

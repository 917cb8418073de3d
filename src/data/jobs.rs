use std::sync::OnceLock;

use chrono::NaiveDate;

use crate::models::job::{JobCategoryTag, JobListing};
use crate::models::language::Localized;

const ALL_INDIA: Localized = Localized::new("All India", "अखिल भारत", "అఖిల భారతదేశం");
const GRADUATE: Localized = Localized::new("Graduate", "स्नातक", "గ్రాడ్యుయేట్");

static RECENT_JOBS: OnceLock<Vec<JobListing>> = OnceLock::new();

pub fn recent_jobs() -> &'static [JobListing] {
    RECENT_JOBS.get_or_init(build_recent_jobs)
}

pub fn find(id: &str) -> Option<&'static JobListing> {
    recent_jobs().iter().find(|job| job.id == id)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn build_recent_jobs() -> Vec<JobListing> {
    vec![
        JobListing {
            id: "1",
            title: Localized::new(
                "IB 4987 Security Assistant/Executive Online Form 2025",
                "IB 4987 सुरक्षा सहायक/कार्यकारी ऑनलाइन फॉर्म 2025",
                "IB 4987 సెక్యూరిటీ అసిస్టెంట్/ఎగ్జిక్యూటివ్ ఆన్‌లైన్ ఫారం 2025",
            ),
            organization: "Intelligence Bureau",
            category: JobCategoryTag::Defense,
            location: ALL_INDIA,
            education: GRADUATE,
            posts: 4987,
            notification_date: date(2025, 1, 20),
            application_deadline: date(2025, 2, 28),
            is_new: true,
            is_hot: true,
            link: "#",
        },
        JobListing {
            id: "2",
            title: Localized::new(
                "BSF 3588 Constable Tradesman Online Form 2025",
                "BSF 3588 कांस्टेबल ट्रेड्समैन ऑनलाइन फॉर्म 2025",
                "BSF 3588 కాన్‌స్టేబుల్ ట్రేడ్స్‌మ్యాన్ ఆన్‌లైన్ ఫారం 2025",
            ),
            organization: "Border Security Force",
            category: JobCategoryTag::Police,
            location: ALL_INDIA,
            education: Localized::new("10th Pass", "10वीं पास", "10వ తరగతి ఉత్తీర్ణత"),
            posts: 3588,
            notification_date: date(2025, 1, 18),
            application_deadline: date(2025, 3, 15),
            is_new: true,
            is_hot: false,
            link: "#",
        },
        JobListing {
            id: "3",
            title: Localized::new(
                "IBPS PO/MT 5208 Online Form 2025",
                "IBPS PO/MT 5208 ऑनलाइन फॉर्म 2025",
                "IBPS PO/MT 5208 ఆన్‌లైన్ ఫారం 2025",
            ),
            organization: "Institute of Banking Personnel Selection",
            category: JobCategoryTag::Bank,
            location: ALL_INDIA,
            education: GRADUATE,
            posts: 5208,
            notification_date: date(2025, 1, 15),
            application_deadline: date(2025, 3, 10),
            is_new: false,
            is_hot: true,
            link: "#",
        },
        JobListing {
            id: "4",
            title: Localized::new(
                "AIIMS 3500 Nursing Officer Online Form 2025",
                "AIIMS 3500 नर्सिंग अधिकारी ऑनलाइन फॉर्म 2025",
                "AIIMS 3500 నర్సింగ్ ఆఫీసర్ ఆన్‌లైన్ ఫారం 2025",
            ),
            organization: "All India Institute of Medical Sciences",
            category: JobCategoryTag::Medical,
            location: Localized::new("Delhi", "दिल्ली", "ఢిల్లీ"),
            education: Localized::new("B.Sc Nursing", "B.Sc नर्सिंग", "B.Sc నర్సింగ్"),
            posts: 3500,
            notification_date: date(2025, 1, 12),
            application_deadline: date(2025, 2, 25),
            is_new: true,
            is_hot: false,
            link: "#",
        },
        JobListing {
            id: "5",
            title: Localized::new(
                "Bank of Baroda 2500 LBO Online Form 2025",
                "बैंक ऑफ बड़ौदा 2500 LBO ऑनलाइन फॉर्म 2025",
                "బ్యాంక్ ఆఫ్ బరోడా 2500 LBO ఆన్‌లైన్ ఫారం 2025",
            ),
            organization: "Bank of Baroda",
            category: JobCategoryTag::Bank,
            location: ALL_INDIA,
            education: GRADUATE,
            posts: 2500,
            notification_date: date(2025, 1, 10),
            application_deadline: date(2025, 2, 20),
            is_new: false,
            is_hot: false,
            link: "#",
        },
        JobListing {
            id: "6",
            title: Localized::new(
                "RRB 6238 Technician Vacancy 2025",
                "RRB 6238 तकनीशियन रिक्ति 2025",
                "RRB 6238 టెక్నీషియన్ వేకెన్సీ 2025",
            ),
            organization: "Railway Recruitment Board",
            category: JobCategoryTag::Railway,
            location: ALL_INDIA,
            education: Localized::new("ITI/Diploma", "ITI/डिप्लोमा", "ITI/డిప్లొమా"),
            posts: 6238,
            notification_date: date(2025, 1, 8),
            application_deadline: date(2025, 4, 10),
            is_new: false,
            is_hot: true,
            link: "#",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deadlines_follow_notifications() {
        for job in recent_jobs() {
            assert!(
                job.application_deadline >= job.notification_date,
                "job {} closes before it was notified",
                job.id
            );
            assert_ne!(job.notification_date, NaiveDate::default());
        }
    }

    #[test]
    fn ids_are_unique_and_text_is_translated() {
        let ids: HashSet<_> = recent_jobs().iter().map(|j| j.id).collect();
        assert_eq!(ids.len(), recent_jobs().len());
        for job in recent_jobs() {
            assert!(job.title.is_complete());
            assert!(job.location.is_complete());
            assert!(job.education.is_complete());
        }
    }

    #[test]
    fn finds_jobs_by_id() {
        assert_eq!(find("6").map(|j| j.posts), Some(6238));
        assert!(find("99").is_none());
    }
}

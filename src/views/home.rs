use serde::Serialize;

use crate::data::jobs;
use crate::i18n::home::{self, HomeStrings};
use crate::i18n::job_card::{self, JobCardStrings};
use crate::models::language::Language;
use crate::utils::time::last_updated_minutes;
use crate::views::job_card::{self as card, JobCardView};

#[derive(Debug, Serialize)]
pub struct QuickStats {
    pub total_jobs: &'static str,
    pub new_today: u32,
    pub trending: u32,
}

pub const QUICK_STATS: QuickStats = QuickStats {
    total_jobs: "12,450+",
    new_today: 156,
    trending: 23,
};

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub text: &'static HomeStrings,
    pub card_text: &'static JobCardStrings,
    pub stats: QuickStats,
    pub last_updated_minutes: u32,
    pub jobs: Vec<JobCardView>,
}

pub fn build(lang: Language) -> HomeView {
    HomeView {
        text: home::strings(lang),
        card_text: job_card::strings(lang),
        stats: QUICK_STATS,
        last_updated_minutes: last_updated_minutes(),
        jobs: jobs::recent_jobs()
            .iter()
            .map(|job| card::build(job, lang))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_recent_job_in_order() {
        let view = build(Language::Hi);
        let ids: Vec<_> = view.jobs.iter().map(|j| j.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(view.text.minutes, "मिनट पहले");
        assert!(view.last_updated_minutes < 30);
        assert_eq!(view.stats.total_jobs, "12,450+");
    }
}

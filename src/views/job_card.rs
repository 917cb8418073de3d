use serde::Serialize;

use crate::models::job::JobListing;
use crate::models::language::Language;
use crate::utils::time::format_date;

#[derive(Debug, Serialize)]
pub struct JobCardView {
    pub id: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub category: &'static str,
    pub category_color: &'static str,
    pub location: &'static str,
    pub education: &'static str,
    pub posts: u32,
    pub notified: String,
    pub deadline: String,
    pub is_new: bool,
    pub is_hot: bool,
    pub link: &'static str,
}

pub fn build(job: &JobListing, lang: Language) -> JobCardView {
    JobCardView {
        id: job.id,
        title: job.title.get(lang),
        organization: job.organization,
        category: job.category.label(),
        category_color: job.category.color_class(),
        location: job.location.get(lang),
        education: job.education.get(lang),
        posts: job.posts,
        notified: format_date(job.notification_date),
        deadline: format_date(job.application_deadline),
        is_new: job.is_new,
        is_hot: job.is_hot,
        link: job.link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::jobs;

    #[test]
    fn railway_card_in_telugu() {
        let job = jobs::find("6").unwrap();
        let card = build(job, Language::Te);
        assert!(card.title.starts_with("RRB 6238"));
        assert_eq!(card.category_color, "bg-job-railway");
        assert_eq!(card.deadline, "10/4/2025");
        assert!(card.is_hot && !card.is_new);
    }

    #[test]
    fn defense_uses_police_palette() {
        let card = build(jobs::find("1").unwrap(), Language::En);
        assert_eq!(card.category, "Defense");
        assert_eq!(card.category_color, "bg-job-police");
    }
}

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::language::Localized;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JobCategoryTag {
    Bank,
    Railway,
    Teaching,
    Engineering,
    Police,
    Medical,
    Defense,
    Government,
}

impl JobCategoryTag {
    pub fn label(&self) -> &'static str {
        match self {
            JobCategoryTag::Bank => "Bank",
            JobCategoryTag::Railway => "Railway",
            JobCategoryTag::Teaching => "Teaching",
            JobCategoryTag::Engineering => "Engineering",
            JobCategoryTag::Police => "Police",
            JobCategoryTag::Medical => "Medical",
            JobCategoryTag::Defense => "Defense",
            JobCategoryTag::Government => "Government",
        }
    }

    /// Badge color class. Defense shares the police palette.
    pub fn color_class(&self) -> &'static str {
        match self {
            JobCategoryTag::Bank => "bg-job-bank",
            JobCategoryTag::Railway => "bg-job-railway",
            JobCategoryTag::Teaching => "bg-job-teaching",
            JobCategoryTag::Engineering => "bg-job-engineering",
            JobCategoryTag::Police | JobCategoryTag::Defense => "bg-job-police",
            JobCategoryTag::Medical => "bg-job-medical",
            JobCategoryTag::Government => "bg-primary",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    pub id: &'static str,
    pub title: Localized,
    pub organization: &'static str,
    pub category: JobCategoryTag,
    pub location: Localized,
    pub education: Localized,
    pub posts: u32,
    pub notification_date: NaiveDate,
    pub application_deadline: NaiveDate,
    pub is_new: bool,
    pub is_hot: bool,
    pub link: &'static str,
}

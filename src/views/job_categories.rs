use serde::Serialize;

use crate::data::categories::{EDUCATION_CATEGORIES, JOB_CATEGORIES};
use crate::i18n::categories::{self, CategoryStrings};
use crate::models::language::Language;

#[derive(Debug, Serialize)]
pub struct CategoryCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub image: Option<&'static str>,
    pub jobs: u32,
    pub new_jobs: u32,
    pub trending: bool,
}

#[derive(Debug, Serialize)]
pub struct EducationCard {
    pub id: &'static str,
    pub title: &'static str,
    pub jobs: u32,
}

#[derive(Debug, Serialize)]
pub struct JobCategoriesView {
    pub text: &'static CategoryStrings,
    pub categories: Vec<CategoryCard>,
    pub education: Vec<EducationCard>,
}

pub fn build(lang: Language) -> JobCategoriesView {
    let categories = JOB_CATEGORIES
        .iter()
        .map(|c| CategoryCard {
            id: c.id,
            title: c.title.get(lang),
            description: c.description.get(lang),
            color: c.color,
            image: c.image,
            jobs: c.jobs,
            new_jobs: c.new_jobs,
            trending: c.trending,
        })
        .collect();
    let education = EDUCATION_CATEGORIES
        .iter()
        .map(|e| EducationCard {
            id: e.id,
            title: e.title.get(lang),
            jobs: e.jobs,
        })
        .collect();

    JobCategoriesView {
        text: categories::strings(lang),
        categories,
        education,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_dataset_order() {
        let view = build(Language::Hi);
        let ids: Vec<_> = view.categories.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            ["bank", "railway", "teaching", "medical", "defence", "engineering"]
        );
        assert_eq!(view.categories[3].title, "चिकित्सा नौकरियां");
        assert_eq!(view.education.len(), 6);
    }
}

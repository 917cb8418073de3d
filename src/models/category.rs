use serde::Serialize;

use crate::models::language::Localized;

#[derive(Debug, Clone, Serialize)]
pub struct JobCategory {
    pub id: &'static str,
    pub title: Localized,
    pub description: Localized,
    pub color: &'static str,
    pub image: Option<&'static str>,
    pub jobs: u32,
    pub new_jobs: u32,
    pub trending: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationCategory {
    pub id: &'static str,
    pub title: Localized,
    pub jobs: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndianState {
    pub code: &'static str,
    pub name: Localized,
    pub jobs: u32,
    pub is_trending: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub key: &'static str,
    pub label: Localized,
    pub color: Option<&'static str>,
    pub count: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarSection {
    pub key: &'static str,
    pub label: Localized,
    pub count: &'static str,
    pub is_new: bool,
    pub is_trending: bool,
}

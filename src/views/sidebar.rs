use serde::Serialize;

use crate::data::navigation::{EDUCATION_SECTIONS, MAIN_SECTIONS};
use crate::i18n::sidebar::{self, SidebarStrings};
use crate::models::category::SidebarSection;
use crate::models::language::Language;

#[derive(Debug, Serialize)]
pub struct SectionEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub count: &'static str,
    pub is_new: bool,
    pub is_trending: bool,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct SidebarView {
    pub text: &'static SidebarStrings,
    pub main_sections: Vec<SectionEntry>,
    pub education_sections: Vec<SectionEntry>,
}

fn entries(sections: &[SidebarSection], lang: Language, active: &str) -> Vec<SectionEntry> {
    sections
        .iter()
        .map(|s| SectionEntry {
            key: s.key,
            label: s.label.get(lang),
            count: s.count,
            is_new: s.is_new,
            is_trending: s.is_trending,
            active: s.key == active,
        })
        .collect()
}

pub fn build(lang: Language, active_category: &str) -> SidebarView {
    SidebarView {
        text: sidebar::strings(lang),
        main_sections: entries(&MAIN_SECTIONS, lang, active_category),
        education_sections: entries(&EDUCATION_SECTIONS, lang, active_category),
    }
}

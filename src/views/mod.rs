pub mod chatbot;
pub mod header;
pub mod home;
pub mod job_card;
pub mod job_categories;
pub mod navigation;
pub mod sidebar;
pub mod state_selector;

use serde::Serialize;
use uuid::Uuid;

use crate::models::language::Language;
use crate::models::page::PageState;

#[derive(Debug, Serialize)]
pub struct PageView {
    pub id: Uuid,
    pub language: Language,
    pub locale: &'static str,
    pub active_category: String,
    pub selected_state: String,
    pub header: header::HeaderView,
    pub navigation: navigation::NavigationView,
    pub sidebar: sidebar::SidebarView,
    pub state_selector: state_selector::StateSelectorView,
    pub home: home::HomeView,
    pub job_categories: job_categories::JobCategoriesView,
    pub chatbot: chatbot::ChatbotView,
}

impl PageView {
    pub fn build(page: &PageState, draft: Option<String>) -> Self {
        let lang = page.language;
        Self {
            id: page.id,
            language: lang,
            locale: lang.locale(),
            active_category: page.active_category.clone(),
            selected_state: page.selected_state.clone(),
            header: header::build(lang, page.mobile_menu_open),
            navigation: navigation::build(lang, &page.active_category, page.nav_dropdown_open),
            sidebar: sidebar::build(lang, &page.active_category),
            state_selector: state_selector::build(lang, &page.selected_state),
            home: home::build(lang),
            job_categories: job_categories::build(lang),
            chatbot: chatbot::build(lang, &page.chat, page.chat_open, draft),
        }
    }
}

use std::time::Instant;

use uuid::Uuid;

use crate::models::chat::ChatSession;
use crate::models::language::Language;

pub const HOME_CATEGORY: &str = "home";
pub const ALL_STATES: &str = "all";

/// One visitor's page: language, selections, open/closed toggles and the
/// chat widget's session.
#[derive(Debug, Clone)]
pub struct PageState {
    pub id: Uuid,
    pub language: Language,
    pub active_category: String,
    pub selected_state: String,
    pub chat_open: bool,
    pub mobile_menu_open: bool,
    pub nav_dropdown_open: bool,
    pub chat: ChatSession,
    pub last_seen: Instant,
}

impl PageState {
    pub fn new(language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            language,
            active_category: HOME_CATEGORY.to_string(),
            selected_state: ALL_STATES.to_string(),
            chat_open: false,
            mobile_menu_open: false,
            nav_dropdown_open: false,
            chat: ChatSession::new(),
            last_seen: Instant::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }
}

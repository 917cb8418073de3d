use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

use crate::models::chat::{ChatMessage, ChatSession, ChatStatus};
use crate::models::language::Language;
use crate::models::page::PageState;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePagePayload {
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LanguagePayload {
    #[validate(length(min = 2, max = 2))]
    pub language: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryPayload {
    #[validate(length(min = 1, max = 64))]
    pub key: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StatePayload {
    #[validate(length(min = 2, max = 3))]
    pub code: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessagePayload {
    #[validate(
        custom(function = "crate::utils::validation::non_blank"),
        length(max = 2000)
    )]
    pub text: String,
    /// Makes the reply attempt fail so the fallback message is appended.
    #[serde(default)]
    pub simulate_failure: bool,
}

/// Body of the HTML chat form. Blank text is allowed here; the handler
/// just redirects back without appending.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LangQuery {
    /// en, hi or te. Falls back to the configured default.
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub draft: Option<String>,
}

pub fn parse_language(raw: &str) -> crate::error::Result<Language> {
    raw.parse().map_err(crate::error::Error::BadRequest)
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub open: bool,
    pub status: ChatStatus,
    pub messages: Vec<ChatMessage>,
}

impl ChatResponse {
    pub fn new(open: bool, session: &ChatSession) -> Self {
        Self {
            open,
            status: session.status(),
            messages: session.messages().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub id: uuid::Uuid,
    pub language: Language,
    pub active_category: String,
    pub selected_state: String,
    pub mobile_menu_open: bool,
    pub nav_dropdown_open: bool,
    pub chat: ChatResponse,
}

impl From<PageState> for PageResponse {
    fn from(page: PageState) -> Self {
        Self {
            id: page.id,
            language: page.language,
            chat: ChatResponse::new(page.chat_open, &page.chat),
            active_category: page.active_category,
            selected_state: page.selected_state,
            mobile_menu_open: page.mobile_menu_open,
            nav_dropdown_open: page.nav_dropdown_open,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SendMessageResponse {
    pub reply: Option<ChatMessage>,
    pub chat: ChatResponse,
}

use serde::Serialize;
use uuid::Uuid;

use crate::i18n::chatbot::{self, ChatbotStrings};
use crate::models::chat::{ChatSession, ChatStatus};
use crate::models::language::Language;
use crate::utils::time::format_clock;

#[derive(Debug, Serialize)]
pub struct MessageView {
    pub id: Uuid,
    pub text: String,
    pub is_bot: bool,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct ChatbotView {
    pub text: &'static ChatbotStrings,
    pub open: bool,
    pub awaiting: bool,
    pub show_samples: bool,
    /// Prefilled input, set when a sample question was picked.
    pub draft: Option<String>,
    pub messages: Vec<MessageView>,
}

pub fn build(
    lang: Language,
    session: &ChatSession,
    open: bool,
    draft: Option<String>,
) -> ChatbotView {
    let messages = session
        .messages()
        .iter()
        .map(|m| MessageView {
            id: m.id,
            text: m.display_text(lang).to_string(),
            is_bot: m.is_bot(),
            time: format_clock(m.created_at),
        })
        .collect();

    ChatbotView {
        text: chatbot::strings(lang),
        open,
        awaiting: session.status() == ChatStatus::AwaitingResponse,
        show_samples: session.len() <= 1,
        draft,
        messages,
    }
}

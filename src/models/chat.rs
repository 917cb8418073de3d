use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::i18n::chatbot::{ERROR_REPLY, WELCOME_MESSAGE};
use crate::models::language::{Language, Localized};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<BTreeMap<Language, String>>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::User, None)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::Bot, None)
    }

    /// Bot message carrying every language variant of `text`.
    pub fn bot_localized(text: &Localized, lang: Language) -> Self {
        let translations = Language::ALL
            .iter()
            .map(|l| (*l, text.get(*l).to_string()))
            .collect();
        Self::new(text.get(lang).to_string(), Sender::Bot, Some(translations))
    }

    fn new(
        content: String,
        sender: Sender,
        translations: Option<BTreeMap<Language, String>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            sender,
            created_at: Utc::now(),
            translations,
        }
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    /// Stored variant for `lang` when the message has one, otherwise the
    /// text it was created with.
    pub fn display_text(&self, lang: Language) -> &str {
        self.translations
            .as_ref()
            .and_then(|t| t.get(&lang))
            .map(String::as_str)
            .unwrap_or(&self.content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatStatus {
    Idle,
    AwaitingResponse,
}

/// A user message waiting for its reply. Carries the session generation it
/// was submitted in so replies outliving a clear can be recognized.
#[derive(Debug, Clone)]
pub struct PendingReply {
    generation: u64,
    pub message_id: Uuid,
    pub text: String,
    pub language: Language,
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    generation: u64,
    awaiting: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn status(&self) -> ChatStatus {
        if self.awaiting {
            ChatStatus::AwaitingResponse
        } else {
            ChatStatus::Idle
        }
    }

    /// Seeds the welcome message when the session has no history.
    /// Returns whether a message was added.
    pub fn ensure_welcome(&mut self, lang: Language) -> bool {
        if !self.messages.is_empty() {
            return false;
        }
        self.messages
            .push(ChatMessage::bot_localized(&WELCOME_MESSAGE, lang));
        true
    }

    pub fn clear(&mut self, lang: Language) {
        self.generation += 1;
        self.awaiting = false;
        self.messages.clear();
        self.ensure_welcome(lang);
    }

    pub fn submit(&mut self, text: &str, lang: Language) -> Result<PendingReply> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::BadRequest("Message text must not be empty".into()));
        }
        if self.awaiting {
            return Err(Error::Conflict(
                "A reply is still being prepared for the previous message".into(),
            ));
        }

        let message = ChatMessage::user(text);
        let pending = PendingReply {
            generation: self.generation,
            message_id: message.id,
            text: message.content.clone(),
            language: lang,
        };
        self.messages.push(message);
        self.awaiting = true;
        Ok(pending)
    }

    /// Appends the reply for `pending`. A failed outcome appends the
    /// error message in `current_lang`. Replies submitted before the last
    /// clear are dropped and `None` is returned.
    pub fn resolve(
        &mut self,
        pending: PendingReply,
        outcome: Result<String>,
        current_lang: Language,
    ) -> Option<&ChatMessage> {
        if pending.generation != self.generation {
            tracing::debug!(
                message_id = %pending.message_id,
                "dropping reply for a chat that was cleared"
            );
            return None;
        }

        let reply = match outcome {
            Ok(text) => ChatMessage::bot(text),
            Err(e) => {
                tracing::warn!(error = %e, "chat reply failed, sending fallback message");
                ChatMessage::bot(ERROR_REPLY.get(current_lang))
            }
        };
        self.awaiting = false;
        self.messages.push(reply);
        self.messages.last()
    }
}

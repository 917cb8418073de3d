use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::data::{navigation, regions};
use crate::error::{Error, Result};
use crate::models::chat::{ChatMessage, PendingReply};
use crate::models::language::Language;
use crate::models::page::{PageState, ALL_STATES};
use crate::services::response_matcher::ResponseMatcher;

/// Owns every visitor's page and applies the page callbacks to it.
/// Handlers get cloned snapshots; the map lock is never held across the
/// matcher delay.
#[derive(Clone)]
pub struct PageService {
    pages: Arc<RwLock<HashMap<Uuid, PageState>>>,
    matcher: ResponseMatcher,
    default_language: Language,
}

impl PageService {
    pub fn new(matcher: ResponseMatcher, default_language: Language) -> Self {
        Self {
            pages: Arc::new(RwLock::new(HashMap::new())),
            matcher,
            default_language,
        }
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub async fn create(&self, language: Option<Language>) -> PageState {
        let page = PageState::new(language.unwrap_or(self.default_language));
        self.pages.write().await.insert(page.id, page.clone());
        tracing::info!(page_id = %page.id, language = %page.language, "page created");
        page
    }

    pub async fn get(&self, id: Uuid) -> Result<PageState> {
        self.update(id, |_| Ok(())).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        match self.pages.write().await.remove(&id) {
            Some(_) => {
                tracing::info!(page_id = %id, "page deleted");
                Ok(())
            }
            None => Err(Error::page_not_found(id)),
        }
    }

    pub async fn count(&self) -> usize {
        self.pages.read().await.len()
    }

    /// Switches the page language. Chat history and selections are kept.
    pub async fn set_language(&self, id: Uuid, language: Language) -> Result<PageState> {
        self.update(id, |page| {
            if page.language != language {
                tracing::info!(page_id = %page.id, from = %page.language, to = %language, "language changed");
            }
            page.language = language;
            Ok(())
        })
        .await
    }

    /// Makes `key` the active category. Used by the navigation, sidebar
    /// and category cards, so any of their keys is accepted.
    pub async fn select_category(&self, id: Uuid, key: &str) -> Result<PageState> {
        let key = key.trim();
        if !navigation::is_known_category_key(key) {
            return Err(Error::BadRequest(format!("Unknown category '{}'", key)));
        }
        self.update(id, |page| {
            page.active_category = key.to_string();
            page.nav_dropdown_open = false;
            Ok(())
        })
        .await
    }

    pub async fn select_state(&self, id: Uuid, code: &str) -> Result<PageState> {
        let code = code.trim();
        let selected = if code.eq_ignore_ascii_case(ALL_STATES) {
            ALL_STATES.to_string()
        } else {
            regions::find(code)
                .map(|s| s.code.to_string())
                .ok_or_else(|| Error::BadRequest(format!("Unknown state '{}'", code)))?
        };
        self.update(id, |page| {
            page.selected_state = selected;
            Ok(())
        })
        .await
    }

    pub async fn toggle_mobile_menu(&self, id: Uuid) -> Result<PageState> {
        self.update(id, |page| {
            page.mobile_menu_open = !page.mobile_menu_open;
            Ok(())
        })
        .await
    }

    pub async fn toggle_nav_dropdown(&self, id: Uuid) -> Result<PageState> {
        self.update(id, |page| {
            page.nav_dropdown_open = !page.nav_dropdown_open;
            Ok(())
        })
        .await
    }

    /// Opens the chat widget, seeding the welcome message on first open.
    pub async fn open_chat(&self, id: Uuid) -> Result<PageState> {
        self.update(id, |page| {
            page.chat_open = true;
            if page.chat.ensure_welcome(page.language) {
                tracing::debug!(page_id = %page.id, "chat seeded with welcome message");
            }
            Ok(())
        })
        .await
    }

    /// Hides the widget. History survives until the page is cleared or
    /// evicted.
    pub async fn close_chat(&self, id: Uuid) -> Result<PageState> {
        self.update(id, |page| {
            page.chat_open = false;
            Ok(())
        })
        .await
    }

    pub async fn clear_chat(&self, id: Uuid) -> Result<PageState> {
        self.update(id, |page| {
            page.chat.clear(page.language);
            tracing::info!(page_id = %page.id, "chat cleared");
            Ok(())
        })
        .await
    }

    /// Appends the user message, waits for the matcher and appends its
    /// reply. `simulate_failure` makes the attempt fail so the localized
    /// error message is appended instead. Returns `None` when the chat was
    /// cleared before the reply arrived.
    pub async fn send_message(
        &self,
        id: Uuid,
        text: &str,
        simulate_failure: bool,
    ) -> Result<Option<ChatMessage>> {
        let pending = {
            let mut pages = self.pages.write().await;
            let page = pages.get_mut(&id).ok_or_else(|| Error::page_not_found(id))?;
            if !page.chat_open {
                return Err(Error::Conflict("Chat is closed".into()));
            }
            page.touch();
            page.chat.submit(text, page.language)?
        };
        tracing::info!(page_id = %id, message_id = %pending.message_id, language = %pending.language, "chat message submitted");

        // The reply runs detached so a dropped request still settles the chat.
        let service = self.clone();
        tokio::spawn(async move { service.deliver_reply(id, pending, simulate_failure).await })
            .await
            .map_err(|e| Error::Internal(format!("reply task failed: {}", e)))?
    }

    async fn deliver_reply(
        &self,
        id: Uuid,
        pending: PendingReply,
        simulate_failure: bool,
    ) -> Result<Option<ChatMessage>> {
        let reply = self.matcher.respond(&pending.text, pending.language).await;
        let outcome = if simulate_failure {
            Err(Error::Internal("reply generation failed".into()))
        } else {
            Ok(reply)
        };

        let mut pages = self.pages.write().await;
        let page = match pages.get_mut(&id) {
            Some(page) => page,
            None => {
                tracing::debug!(page_id = %id, "page removed before its reply arrived");
                return Err(Error::page_not_found(id));
            }
        };
        let language = page.language;
        Ok(page.chat.resolve(pending, outcome, language).cloned())
    }

    /// Drops pages not seen for `idle`. Returns how many were removed.
    pub async fn evict_idle(&self, idle: Duration) -> usize {
        let now = Instant::now();
        let mut pages = self.pages.write().await;
        let before = pages.len();
        pages.retain(|_, page| now.saturating_duration_since(page.last_seen) < idle);
        let evicted = before - pages.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = pages.len(), "evicted idle pages");
        }
        evicted
    }

    async fn update<F>(&self, id: Uuid, f: F) -> Result<PageState>
    where
        F: FnOnce(&mut PageState) -> Result<()>,
    {
        let mut pages = self.pages.write().await;
        let page = pages.get_mut(&id).ok_or_else(|| Error::page_not_found(id))?;
        page.touch();
        f(page)?;
        Ok(page.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::chatbot::{ERROR_REPLY, WELCOME_MESSAGE};
    use crate::models::chat::{ChatStatus, Sender};
    use crate::models::page::HOME_CATEGORY;
    use crate::services::response_matcher::{MockThinkingDelay, DEFAULT_REPLY};
    use tokio_test::{assert_err, assert_ok};

    fn instant_service() -> PageService {
        PageService::new(
            ResponseMatcher::with_bounds(Duration::ZERO, Duration::ZERO),
            Language::En,
        )
    }

    #[tokio::test]
    async fn new_page_starts_at_home() {
        let service = instant_service();
        let page = service.create(None).await;
        assert_eq!(page.language, Language::En);
        assert_eq!(page.active_category, HOME_CATEGORY);
        assert_eq!(page.selected_state, ALL_STATES);
        assert!(!page.chat_open && page.chat.is_empty());
        assert_eq!(service.count().await, 1);
    }

    #[tokio::test]
    async fn unknown_page_is_not_found() {
        let service = instant_service();
        let err = service.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_err!(service.delete(Uuid::new_v4()).await);
    }

    #[tokio::test]
    async fn bank_question_gets_bank_reply() {
        let service = instant_service();
        let page = service.create(Some(Language::En)).await;
        service.open_chat(page.id).await.unwrap();

        let reply = assert_ok!(service.send_message(page.id, "Show me latest bank jobs", false).await)
            .unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert!(reply.content.contains("IBPS PO 2025"));

        let page = service.get(page.id).await.unwrap();
        assert_eq!(page.chat.len(), 3);
        assert_eq!(page.chat.status(), ChatStatus::Idle);
    }

    #[tokio::test]
    async fn hindi_railway_question_gets_hindi_reply() {
        let service = instant_service();
        let page = service.create(Some(Language::Hi)).await;
        service.open_chat(page.id).await.unwrap();
        let reply = service
            .send_message(page.id, "रेलवे नौकरी", false)
            .await
            .unwrap()
            .unwrap();
        assert!(reply.content.contains("आरआरबी तकनीशियन 2025"));
    }

    #[tokio::test]
    async fn telugu_greeting_gets_default_reply() {
        let service = instant_service();
        let page = service.create(Some(Language::Te)).await;
        service.open_chat(page.id).await.unwrap();
        let reply = service.send_message(page.id, "hello", false).await.unwrap().unwrap();
        assert_eq!(reply.content, DEFAULT_REPLY.te);
    }

    #[tokio::test]
    async fn flagged_failure_appends_error_reply() {
        let service = instant_service();
        let page = service.create(Some(Language::En)).await;
        service.open_chat(page.id).await.unwrap();
        let reply = service.send_message(page.id, "anything", true).await.unwrap().unwrap();
        assert_eq!(reply.content, ERROR_REPLY.en);
        assert_eq!(service.get(page.id).await.unwrap().chat.len(), 3);
    }

    #[tokio::test]
    async fn sending_requires_open_chat() {
        let service = instant_service();
        let page = service.create(None).await;
        let err = service.send_message(page.id, "bank", false).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn blank_text_appends_nothing() {
        let service = instant_service();
        let page = service.create(None).await;
        service.open_chat(page.id).await.unwrap();
        let err = service.send_message(page.id, "   ", false).await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
        assert_eq!(service.get(page.id).await.unwrap().chat.len(), 1);
    }

    #[tokio::test]
    async fn language_change_keeps_history_and_selections() {
        let service = instant_service();
        let page = service.create(Some(Language::En)).await;
        service.open_chat(page.id).await.unwrap();
        service.send_message(page.id, "bank", false).await.unwrap();
        service.select_category(page.id, "railway").await.unwrap();
        service.select_state(page.id, "ts").await.unwrap();

        let page = service.set_language(page.id, Language::Te).await.unwrap();
        assert_eq!(page.language, Language::Te);
        assert_eq!(page.chat.len(), 3);
        assert_eq!(page.active_category, "railway");
        assert_eq!(page.selected_state, "TS");
        assert!(page.chat_open);
    }

    #[tokio::test]
    async fn reopening_keeps_history() {
        let service = instant_service();
        let page = service.create(None).await;
        service.open_chat(page.id).await.unwrap();
        service.send_message(page.id, "railway", false).await.unwrap();
        service.close_chat(page.id).await.unwrap();
        let page = service.open_chat(page.id).await.unwrap();
        assert_eq!(page.chat.len(), 3);
        assert_eq!(page.chat.messages()[0].content, WELCOME_MESSAGE.en);
    }

    #[tokio::test]
    async fn clear_resets_to_welcome() {
        let service = instant_service();
        let page = service.create(Some(Language::Hi)).await;
        service.open_chat(page.id).await.unwrap();
        for _ in 0..3 {
            service.send_message(page.id, "bank", false).await.unwrap();
        }
        let page = service.clear_chat(page.id).await.unwrap();
        assert_eq!(page.chat.len(), 1);
        assert_eq!(page.chat.messages()[0].content, WELCOME_MESSAGE.hi);
    }

    #[tokio::test]
    async fn rejects_unknown_keys() {
        let service = instant_service();
        let page = service.create(None).await;
        assert!(matches!(
            service.select_category(page.id, "pilot").await,
            Err(Error::BadRequest(_))
        ));
        assert!(matches!(
            service.select_state(page.id, "ZZ").await,
            Err(Error::BadRequest(_))
        ));
        let page = service.select_state(page.id, "ALL").await.unwrap();
        assert_eq!(page.selected_state, ALL_STATES);
    }

    #[tokio::test]
    async fn choosing_a_category_closes_dropdown() {
        let service = instant_service();
        let page = service.create(None).await;
        assert!(service.toggle_nav_dropdown(page.id).await.unwrap().nav_dropdown_open);
        assert!(service.toggle_mobile_menu(page.id).await.unwrap().mobile_menu_open);
        let page = service.select_category(page.id, "medical").await.unwrap();
        assert!(!page.nav_dropdown_open);
        assert!(page.mobile_menu_open);
    }

    #[tokio::test]
    async fn second_send_while_awaiting_conflicts() {
        let mut delay = MockThinkingDelay::new();
        delay
            .expect_next_delay()
            .returning(|| Duration::from_millis(50));
        let service = PageService::new(ResponseMatcher::new(Arc::new(delay)), Language::En);
        let page = service.create(None).await;
        service.open_chat(page.id).await.unwrap();

        let first = {
            let service = service.clone();
            tokio::spawn(async move { service.send_message(page.id, "bank", false).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = service.send_message(page.id, "railway", false).await;
        assert!(matches!(second, Err(Error::Conflict(_))));

        assert!(first.await.unwrap().unwrap().is_some());
        assert_eq!(service.get(page.id).await.unwrap().chat.len(), 3);
    }

    #[tokio::test]
    async fn reply_outliving_a_clear_is_discarded() {
        let mut delay = MockThinkingDelay::new();
        delay
            .expect_next_delay()
            .returning(|| Duration::from_millis(50));
        let service = PageService::new(ResponseMatcher::new(Arc::new(delay)), Language::En);
        let page = service.create(None).await;
        service.open_chat(page.id).await.unwrap();

        let send = {
            let service = service.clone();
            tokio::spawn(async move { service.send_message(page.id, "bank", false).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        service.clear_chat(page.id).await.unwrap();

        assert!(send.await.unwrap().unwrap().is_none());
        assert_eq!(service.get(page.id).await.unwrap().chat.len(), 1);
    }

    #[tokio::test]
    async fn abandoned_send_still_settles_chat() {
        let mut delay = MockThinkingDelay::new();
        delay
            .expect_next_delay()
            .returning(|| Duration::from_millis(200));
        let service = PageService::new(ResponseMatcher::new(Arc::new(delay)), Language::En);
        let page = service.create(None).await;
        service.open_chat(page.id).await.unwrap();

        let send = {
            let service = service.clone();
            tokio::spawn(async move { service.send_message(page.id, "bank", false).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        send.abort();
        tokio::time::sleep(Duration::from_millis(400)).await;

        let settled = service.get(page.id).await.unwrap();
        assert_eq!(settled.chat.status(), ChatStatus::Idle);
        assert_eq!(settled.chat.len(), 3);
        assert!(settled.chat.messages()[2].content.contains("IBPS PO 2025"));
        assert_ok!(service.send_message(page.id, "railway", false).await);
    }

    #[tokio::test]
    async fn evicts_only_idle_pages() {
        let service = instant_service();
        let stale = service.create(None).await;
        {
            let mut pages = service.pages.write().await;
            if let Some(page) = pages.get_mut(&stale.id) {
                page.last_seen = Instant::now() - Duration::from_secs(120);
            }
        }
        let fresh = service.create(None).await;

        assert_eq!(service.evict_idle(Duration::from_secs(60)).await, 1);
        assert_err!(service.get(stale.id).await);
        assert_ok!(service.get(fresh.id).await);
    }
}

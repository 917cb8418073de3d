pub mod config;
pub mod data;
pub mod dto;
pub mod error;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
pub mod views;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    page_service::PageService, render_service::Renderer, response_matcher::ResponseMatcher,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pages: PageService,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let (min_delay, max_delay) = config.chat_delay_bounds();
        let matcher = ResponseMatcher::with_bounds(min_delay, max_delay);
        let pages = PageService::new(matcher, config.default_language);
        let renderer = Renderer::new()?;

        Ok(Self {
            config: Arc::new(config.clone()),
            pages,
            renderer,
        })
    }
}

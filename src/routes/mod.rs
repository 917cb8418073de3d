pub mod api;
pub mod catalog;
pub mod health;
pub mod openapi;
pub mod web;

use axum::{
    routing::{get, post},
    Router,
};

use crate::middleware::{cors::permissive_cors, rate_limit};
use crate::AppState;

/// Assembles every route group. Page, catalog and chat-send routes get
/// their own request budgets.
pub fn router(state: AppState) -> Router {
    let config = state.config.clone();

    let web_pages = Router::new()
        .route("/", get(web::index))
        .route("/pages/:id", get(web::show_page))
        .route("/pages/:id/language", post(web::set_language))
        .route("/pages/:id/category", post(web::select_category))
        .route("/pages/:id/state", post(web::select_state))
        .route("/pages/:id/menu", post(web::toggle_menu))
        .route("/pages/:id/nav-dropdown", post(web::toggle_nav_dropdown))
        .route("/pages/:id/chat/open", post(web::open_chat))
        .route("/pages/:id/chat/close", post(web::close_chat))
        .route("/pages/:id/chat/clear", post(web::clear_chat))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(config.public_rps),
            rate_limit::rps_middleware,
        ));

    let public_api = Router::new()
        .route("/api/pages", post(api::create_page))
        .route("/api/pages/:id", get(api::get_page).delete(api::delete_page))
        .route("/api/pages/:id/language", axum::routing::patch(api::set_language))
        .route("/api/pages/:id/category", axum::routing::patch(api::select_category))
        .route("/api/pages/:id/state", axum::routing::patch(api::select_state))
        .route("/api/pages/:id/menu", post(api::toggle_menu))
        .route("/api/pages/:id/nav-dropdown", post(api::toggle_nav_dropdown))
        .route("/api/pages/:id/chat", get(api::get_chat))
        .route("/api/pages/:id/chat/open", post(api::open_chat))
        .route("/api/pages/:id/chat/close", post(api::close_chat))
        .route("/api/pages/:id/chat/clear", post(api::clear_chat))
        .route("/api/jobs", get(catalog::list_jobs))
        .route("/api/jobs/:id", get(catalog::get_job))
        .route("/api/categories", get(catalog::list_categories))
        .route("/api/states", get(catalog::list_states))
        .route("/api/openapi.json", get(openapi::openapi_json))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(config.public_rps),
            rate_limit::rps_middleware,
        ));

    let chat_api = Router::new()
        .route("/pages/:id/chat/messages", post(web::send_message))
        .route("/api/pages/:id/chat/messages", post(api::send_message))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(config.chat_rps),
            rate_limit::rps_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .merge(web_pages)
        .merge(public_api.layer(permissive_cors()))
        .merge(chat_api.layer(permissive_cors()))
        .with_state(state)
}

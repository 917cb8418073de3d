use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::page_dto::{
    parse_language, CategoryPayload, ChatForm, LangQuery, LanguagePayload, PageQuery, StatePayload,
};
use crate::error::{Error, Result};
use crate::views::PageView;
use crate::AppState;

fn back_to(id: Uuid) -> Redirect {
    Redirect::to(&format!("/pages/{}", id))
}

#[axum::debug_handler]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Result<Redirect> {
    let language = query.lang.as_deref().map(parse_language).transpose()?;
    let page = state.pages.create(language).await;
    Ok(back_to(page.id))
}

/// Renders the page. Unknown or evicted ids start over with a fresh page.
#[axum::debug_handler]
pub async fn show_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    let page = match state.pages.get(id).await {
        Ok(page) => page,
        Err(Error::NotFound(_)) => return Ok(Redirect::to("/").into_response()),
        Err(e) => return Err(e),
    };
    let view = PageView::build(&page, query.draft);
    let html = state.renderer.render_page(&view)?;
    Ok(Html(html).into_response())
}

#[axum::debug_handler]
pub async fn set_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(payload): Form<LanguagePayload>,
) -> Result<Redirect> {
    payload.validate()?;
    let language = parse_language(&payload.language)?;
    state.pages.set_language(id, language).await?;
    Ok(back_to(id))
}

#[axum::debug_handler]
pub async fn select_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(payload): Form<CategoryPayload>,
) -> Result<Redirect> {
    payload.validate()?;
    state.pages.select_category(id, &payload.key).await?;
    Ok(back_to(id))
}

#[axum::debug_handler]
pub async fn select_state(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(payload): Form<StatePayload>,
) -> Result<Redirect> {
    payload.validate()?;
    state.pages.select_state(id, &payload.code).await?;
    Ok(back_to(id))
}

#[axum::debug_handler]
pub async fn toggle_menu(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Redirect> {
    state.pages.toggle_mobile_menu(id).await?;
    Ok(back_to(id))
}

#[axum::debug_handler]
pub async fn toggle_nav_dropdown(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect> {
    state.pages.toggle_nav_dropdown(id).await?;
    Ok(back_to(id))
}

#[axum::debug_handler]
pub async fn open_chat(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Redirect> {
    state.pages.open_chat(id).await?;
    Ok(back_to(id))
}

#[axum::debug_handler]
pub async fn close_chat(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Redirect> {
    state.pages.close_chat(id).await?;
    Ok(back_to(id))
}

#[axum::debug_handler]
pub async fn clear_chat(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Redirect> {
    state.pages.clear_chat(id).await?;
    Ok(back_to(id))
}

/// Blank input and a send racing an unanswered one are ignored, the same
/// as the disabled send button.
#[axum::debug_handler]
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<ChatForm>,
) -> Result<Redirect> {
    if form.text.trim().is_empty() {
        return Ok(back_to(id));
    }
    match state.pages.send_message(id, &form.text, false).await {
        Ok(_) | Err(Error::Conflict(_)) => Ok(back_to(id)),
        Err(e) => Err(e),
    }
}

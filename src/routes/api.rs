use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::page_dto::{
    parse_language, CategoryPayload, ChatResponse, CreatePagePayload, LanguagePayload,
    PageResponse, SendMessagePayload, SendMessageResponse, StatePayload,
};
use crate::error::Result;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/pages",
    request_body = CreatePagePayload,
    responses(
        (status = 201, description = "Page created", body = PageResponse),
        (status = 400, description = "Unsupported language")
    )
)]
#[axum::debug_handler]
pub async fn create_page(
    State(state): State<AppState>,
    payload: Option<Json<CreatePagePayload>>,
) -> Result<Response> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let language = payload.language.as_deref().map(parse_language).transpose()?;
    let page = state.pages.create(language).await;
    Ok((StatusCode::CREATED, Json(PageResponse::from(page))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/pages/{id}",
    params(("id" = Uuid, Path, description = "Page ID")),
    responses(
        (status = 200, description = "Page state", body = PageResponse),
        (status = 404, description = "Page not found")
    )
)]
#[axum::debug_handler]
pub async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PageResponse>> {
    let page = state.pages.get(id).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    delete,
    path = "/api/pages/{id}",
    params(("id" = Uuid, Path, description = "Page ID")),
    responses(
        (status = 204, description = "Page deleted"),
        (status = 404, description = "Page not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.pages.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/api/pages/{id}/language",
    params(("id" = Uuid, Path, description = "Page ID")),
    request_body = LanguagePayload,
    responses(
        (status = 200, description = "Language switched", body = PageResponse),
        (status = 400, description = "Unsupported language"),
        (status = 404, description = "Page not found")
    )
)]
#[axum::debug_handler]
pub async fn set_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LanguagePayload>,
) -> Result<Json<PageResponse>> {
    payload.validate()?;
    let language = parse_language(&payload.language)?;
    let page = state.pages.set_language(id, language).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    patch,
    path = "/api/pages/{id}/category",
    params(("id" = Uuid, Path, description = "Page ID")),
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Active category changed", body = PageResponse),
        (status = 400, description = "Unknown category key"),
        (status = 404, description = "Page not found")
    )
)]
#[axum::debug_handler]
pub async fn select_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<PageResponse>> {
    payload.validate()?;
    let page = state.pages.select_category(id, &payload.key).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    patch,
    path = "/api/pages/{id}/state",
    params(("id" = Uuid, Path, description = "Page ID")),
    request_body = StatePayload,
    responses(
        (status = 200, description = "Selected state changed", body = PageResponse),
        (status = 400, description = "Unknown state code"),
        (status = 404, description = "Page not found")
    )
)]
#[axum::debug_handler]
pub async fn select_state(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<StatePayload>,
) -> Result<Json<PageResponse>> {
    payload.validate()?;
    let page = state.pages.select_state(id, &payload.code).await?;
    Ok(Json(page.into()))
}

#[axum::debug_handler]
pub async fn toggle_menu(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PageResponse>> {
    let page = state.pages.toggle_mobile_menu(id).await?;
    Ok(Json(page.into()))
}

#[axum::debug_handler]
pub async fn toggle_nav_dropdown(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PageResponse>> {
    let page = state.pages.toggle_nav_dropdown(id).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/pages/{id}/chat",
    params(("id" = Uuid, Path, description = "Page ID")),
    responses(
        (status = 200, description = "Chat session", body = ChatResponse),
        (status = 404, description = "Page not found")
    )
)]
#[axum::debug_handler]
pub async fn get_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatResponse>> {
    let page = state.pages.get(id).await?;
    Ok(Json(ChatResponse::new(page.chat_open, &page.chat)))
}

#[axum::debug_handler]
pub async fn open_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatResponse>> {
    let page = state.pages.open_chat(id).await?;
    Ok(Json(ChatResponse::new(page.chat_open, &page.chat)))
}

#[axum::debug_handler]
pub async fn close_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatResponse>> {
    let page = state.pages.close_chat(id).await?;
    Ok(Json(ChatResponse::new(page.chat_open, &page.chat)))
}

#[utoipa::path(
    post,
    path = "/api/pages/{id}/chat/clear",
    params(("id" = Uuid, Path, description = "Page ID")),
    responses(
        (status = 200, description = "Chat reset to the welcome message", body = ChatResponse),
        (status = 404, description = "Page not found")
    )
)]
#[axum::debug_handler]
pub async fn clear_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatResponse>> {
    let page = state.pages.clear_chat(id).await?;
    Ok(Json(ChatResponse::new(page.chat_open, &page.chat)))
}

#[utoipa::path(
    post,
    path = "/api/pages/{id}/chat/messages",
    params(("id" = Uuid, Path, description = "Page ID")),
    request_body = SendMessagePayload,
    responses(
        (status = 200, description = "Reply appended", body = SendMessageResponse),
        (status = 400, description = "Blank message"),
        (status = 404, description = "Page not found"),
        (status = 409, description = "Chat closed or still waiting for a reply")
    )
)]
#[axum::debug_handler]
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SendMessagePayload>,
) -> Result<Json<SendMessageResponse>> {
    payload.validate()?;
    let reply = state
        .pages
        .send_message(id, &payload.text, payload.simulate_failure)
        .await?;
    let page = state.pages.get(id).await?;
    Ok(Json(SendMessageResponse {
        reply,
        chat: ChatResponse::new(page.chat_open, &page.chat),
    }))
}

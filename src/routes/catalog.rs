use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use crate::data::jobs;
use crate::dto::page_dto::{parse_language, LangQuery};
use crate::error::{Error, Result};
use crate::models::language::Language;
use crate::models::page::ALL_STATES;
use crate::views::job_card::{self, JobCardView};
use crate::views::job_categories::{self, JobCategoriesView};
use crate::views::state_selector::{self, StateSelectorView};
use crate::AppState;

fn language(state: &AppState, query: &LangQuery) -> Result<Language> {
    match query.lang.as_deref() {
        Some(raw) => parse_language(raw),
        None => Ok(state.pages.default_language()),
    }
}

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(LangQuery),
    responses(
        (status = 200, description = "Recent job listings", body = Vec<JobCardView>),
        (status = 400, description = "Unsupported language")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Result<Json<Vec<JobCardView>>> {
    let lang = language(&state, &query)?;
    let cards = jobs::recent_jobs()
        .iter()
        .map(|job| job_card::build(job, lang))
        .collect();
    Ok(Json(cards))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = String, Path, description = "Job ID"),
        LangQuery
    ),
    responses(
        (status = 200, description = "Job listing", body = JobCardView),
        (status = 400, description = "Unsupported language"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Json<JobCardView>> {
    let lang = language(&state, &query)?;
    let job = jobs::find(&id).ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))?;
    Ok(Json(job_card::build(job, lang)))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    params(LangQuery),
    responses(
        (status = 200, description = "Job and education categories", body = JobCategoriesView),
        (status = 400, description = "Unsupported language")
    )
)]
#[axum::debug_handler]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Result<Json<JobCategoriesView>> {
    let lang = language(&state, &query)?;
    Ok(Json(job_categories::build(lang)))
}

#[utoipa::path(
    get,
    path = "/api/states",
    params(LangQuery),
    responses(
        (status = 200, description = "States, trending first", body = StateSelectorView),
        (status = 400, description = "Unsupported language")
    )
)]
#[axum::debug_handler]
pub async fn list_states(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Result<Json<StateSelectorView>> {
    let lang = language(&state, &query)?;
    Ok(Json(state_selector::build(lang, ALL_STATES)))
}

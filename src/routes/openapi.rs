use axum::response::Json;
use utoipa::OpenApi;

use crate::routes::{api, catalog};

#[derive(OpenApi)]
#[openapi(
    info(title = "Job Wiz Hub API"),
    paths(
        api::create_page,
        api::get_page,
        api::delete_page,
        api::set_language,
        api::select_category,
        api::select_state,
        api::get_chat,
        api::clear_chat,
        api::send_message,
        catalog::list_jobs,
        catalog::get_job,
        catalog::list_categories,
        catalog::list_states,
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

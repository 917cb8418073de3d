use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use job_wiz_hub::{config::Config, routes, AppState};
use tower::ServiceExt;

fn app() -> Router {
    let config = Config {
        public_rps: 1000,
        chat_rps: 1000,
        chat_min_delay_ms: 0,
        chat_max_delay_ms: 0,
        ..Config::default()
    };
    routes::router(AppState::new(&config).expect("app state"))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(resp.into_body(), 4 * 1024 * 1024).await.unwrap();
    (status, location, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, Option<String>) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    (resp.status(), location)
}

async fn new_page(app: &Router, lang: &str) -> String {
    let (status, location, _) = get(app, &format!("/?lang={}", lang)).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    location.unwrap()
}

#[tokio::test]
async fn landing_page_renders_in_requested_language() {
    let app = app();
    let page = new_page(&app, "te").await;
    assert!(page.starts_with("/pages/"));

    let (status, _, html) = get(&app, &page).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("lang=\"te\""));
    assert!(html.contains("తాజా ఉద్యోగ అప్‌డేట్‌లు"));
    assert!(html.contains("RRB 6238"));
    assert!(html.contains("10/4/2025"));
}

#[tokio::test]
async fn chat_round_trip_through_forms() {
    let app = app();
    let page = new_page(&app, "en").await;

    let (status, location) = post_form(&app, &format!("{}/chat/open", page), "").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some(page.as_str()));

    let (status, _) = post_form(&app, &format!("{}/chat/messages", page), "text=railway+jobs").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, _, html) = get(&app, &page).await;
    assert!(html.contains("chat-panel"));
    assert!(html.contains("RRB Technician 2025"));
    assert!(!html.contains("sample-questions"));
}

#[tokio::test]
async fn blank_form_message_just_redirects() {
    let app = app();
    let page = new_page(&app, "en").await;
    post_form(&app, &format!("{}/chat/open", page), "").await;

    let (status, location) = post_form(&app, &format!("{}/chat/messages", page), "text=+++").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some(page.as_str()));

    let (_, _, html) = get(&app, &page).await;
    assert!(html.contains("sample-questions"));
}

#[tokio::test]
async fn sample_question_prefills_input() {
    let app = app();
    let page = new_page(&app, "en").await;
    post_form(&app, &format!("{}/chat/open", page), "").await;

    let (_, _, html) = get(&app, &format!("{}?draft=Show+me+latest+bank+jobs", page)).await;
    assert!(html.contains("value=\"Show me latest bank jobs\""));
}

#[tokio::test]
async fn language_and_state_forms_update_page() {
    let app = app();
    let page = new_page(&app, "en").await;

    post_form(&app, &format!("{}/language", page), "language=hi").await;
    post_form(&app, &format!("{}/state", page), "code=KA").await;
    let (_, _, html) = get(&app, &page).await;
    assert!(html.contains("lang=\"hi\""));
    assert!(html.contains("class=\"state selected\""));

    let (status, _) = post_form(&app, &format!("{}/category", page), "key=nowhere").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_page_starts_over() {
    let app = app();
    let (status, location, _) =
        get(&app, "/pages/00000000-0000-0000-0000-000000000000").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use shared::UpdateDesk;
use tower_http::trace::TraceLayer;

use crate::markdown;

const INDEX_HTML: &str = include_str!("../assets/index.html");

pub type AppState = Arc<UpdateDesk>;

#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageReply {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MarkdownReply {
    pub markdown: String,
    pub html: String,
}

impl MarkdownReply {
    fn new(markdown: String) -> Self {
        let html = markdown::to_html(&markdown);
        Self { markdown, html }
    }
}

pub fn router(desk: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/fetch", post(fetch_updates))
        .route("/api/summarize", post(summarize_update))
        .route("/api/recent", get(recent_updates))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(desk)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn fetch_updates(
    State(desk): State<AppState>,
    Json(body): Json<FetchRequest>,
) -> Json<MessageReply> {
    let message = desk.fetch(body.source_url.as_deref()).await;
    Json(MessageReply { message })
}

async fn summarize_update(
    State(desk): State<AppState>,
    Json(body): Json<SummarizeRequest>,
) -> Json<MarkdownReply> {
    let markdown = desk.summarize(body.text.as_deref()).await;
    Json(MarkdownReply::new(markdown))
}

async fn recent_updates(State(desk): State<AppState>) -> Json<MarkdownReply> {
    Json(MarkdownReply::new(desk.recent()))
}

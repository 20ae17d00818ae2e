//! Leadbook HTTP server.
//!
//! Composes the JSON REST API with the embedded browser client and exposes
//! the full application [`Router`].

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  http::header,
  response::{Html, IntoResponse},
  routing::get,
};
use leadbook_store_json::JsonStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` layered
/// under the `LEADBOOK_*` environment. Every field has a default, so the
/// server runs with no configuration at all.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String {
  "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
  3000
}

fn default_store_path() -> PathBuf {
  PathBuf::from("leads.json")
}

// ─── Router ───────────────────────────────────────────────────────────────────

const INDEX_HTML: &str = include_str!("../assets/index.html");
const APP_JS: &str = include_str!("../assets/app.js");
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Build the full application router: the REST API under `/api`, the
/// embedded client bundle at the root.
pub fn router(store: Arc<JsonStore>) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/app.js", get(app_js))
    .route("/styles.css", get(styles_css))
    .nest("/api", leadbook_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<&'static str> {
  Html(INDEX_HTML)
}

async fn app_js() -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "application/javascript")], APP_JS)
}

async fn styles_css() -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "text/css")], STYLES_CSS)
}

//! HTTP routes for the feed.
//!
//! - `GET /` renders the feed page, optionally filtered by `?category=`
//! - `GET /api/papers` returns the same listing as JSON
//! - `GET|POST /refresh` forces a fetch and redirects home
//! - `GET /debug` prints cache diagnostics
//! - `GET /health` reports liveness

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
    routing::get,
};
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::formatters::{html, text};
use crate::service::PaperService;

/// Query parameters for the listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    category: Option<String>,
}

impl ListQuery {
    /// Category filter with blank values treated as absent.
    fn category(&self) -> Option<&str> {
        self.category.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

/// Create the HTTP router for the feed.
pub fn create_router(service: Arc<PaperService>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/papers", get(list_papers))
        .route("/refresh", get(refresh).post(refresh))
        .route("/debug", get(debug))
        .route("/health", get(health_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()))
        .with_state(service)
}

async fn home(State(service): State<Arc<PaperService>>, Query(query): Query<ListQuery>) -> Html<String> {
    let listing = service.listing(query.category()).await;
    Html(html::render_page(&listing))
}

async fn list_papers(
    State(service): State<Arc<PaperService>>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    Json(service.listing(query.category()).await)
}

async fn refresh(State(service): State<Arc<PaperService>>) -> Redirect {
    let papers = service.refresh().await;
    tracing::info!(count = papers.len(), "Manual refresh finished");
    Redirect::to("/")
}

async fn debug(State(service): State<Arc<PaperService>>) -> String {
    let info = service.cache_info().await;
    let papers = service.papers().await;
    text::format_debug_report(&info, papers.len())
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "daily-ai-feed",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

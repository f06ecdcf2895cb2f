use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use std::{path::PathBuf, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{CatalogProvider, TrailerResolver},
};

pub mod movies;
pub mod trailer;

/// Shared application state
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub trailers: TrailerResolver,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            trailers: TrailerResolver::new(catalog.clone()),
            catalog,
        }
    }
}

/// Creates the application router with all routes
///
/// When `static_dir` is set, paths that match no route are served from it,
/// with `index.html` answering for anything the directory does not contain.
pub fn create_router(state: Arc<AppState>, static_dir: Option<PathBuf>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(state);

    if let Some(dir) = static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(
            ServeDir::new(dir)
                .append_index_html_on_directories(true)
                .fallback(index),
        );
    }

    router.layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
            .layer(CorsLayer::permissive()),
    )
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trending", get(movies::trending))
        .route("/search", get(movies::search))
        .route("/trailer/:movie_id", get(trailer::best_trailer))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

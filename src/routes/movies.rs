use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult, middleware::request_id::RequestId, models::MoviePage, routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    query: Option<String>,
}

/// Handler for trending movies endpoint
pub async fn trending(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<MoviePage>> {
    tracing::info!(request_id = %request_id, "Fetching trending movies");

    let page = state
        .catalog
        .trending_movies()
        .await
        .map_err(|e| e.upstream("Failed to fetch trending movies"))?;

    Ok(Json(page))
}

/// Handler for movie search endpoint. A blank query short-circuits to an empty page.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<MoviePage>> {
    let query = params.query.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Ok(Json(MoviePage::empty()));
    }

    tracing::info!(request_id = %request_id, query = %query, "Searching movies");

    let page = state
        .catalog
        .search_movies(query)
        .await
        .map_err(|e| e.upstream("Failed to search movies"))?;

    Ok(Json(page))
}

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::TrailerResponse,
    routes::AppState,
};

/// Handler for the best-trailer endpoint
pub async fn best_trailer(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(movie_id): Path<String>,
) -> AppResult<Json<TrailerResponse>> {
    let movie_id = movie_id.trim();
    if movie_id.is_empty() {
        return Err(AppError::InvalidInput(
            "Movie id cannot be empty".to_string(),
        ));
    }

    let trailer = state
        .trailers
        .resolve_best_video(movie_id)
        .await
        .map_err(|e| e.upstream("Failed to fetch movie trailer"))?;

    match &trailer {
        Some(video) => tracing::info!(
            request_id = %request_id,
            movie_id = %movie_id,
            key = %video.key,
            video_type = %video.video_type,
            "Trailer resolved"
        ),
        None => tracing::warn!(
            request_id = %request_id,
            movie_id = %movie_id,
            "No YouTube video found for movie"
        ),
    }

    Ok(Json(TrailerResponse { trailer }))
}

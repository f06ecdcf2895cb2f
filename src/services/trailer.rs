use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{LanguageScope, VideoCandidate},
    services::{providers::CatalogProvider, scoring::score},
};

/// One fetch attempt against the videos endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Scoped to the preferred language; failures are recovered
    Scoped,
    /// No scope; failures reach the caller
    Unscoped,
}

impl Pass {
    fn scope(self) -> Option<LanguageScope> {
        match self {
            Pass::Scoped => Some(LanguageScope::EN_US),
            Pass::Unscoped => None,
        }
    }
}

/// Picks the best playable video for a movie
#[derive(Clone)]
pub struct TrailerResolver {
    catalog: Arc<dyn CatalogProvider>,
}

impl TrailerResolver {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog }
    }

    /// Returns the highest ranked YouTube video, or `None` when the movie has none.
    ///
    /// Errors only when the unscoped fetch fails.
    #[tracing::instrument(skip(self), fields(provider = self.catalog.name()))]
    pub async fn resolve_best_video(&self, movie_id: &str) -> AppResult<Option<VideoCandidate>> {
        let mut eligible = match self.fetch_eligible(movie_id, Pass::Scoped).await {
            Ok(videos) => videos,
            Err(e) => {
                tracing::warn!(error = %e, "Scoped video fetch failed, falling back");
                Vec::new()
            }
        };

        if needs_fallback(&eligible) {
            eligible = self.fetch_eligible(movie_id, Pass::Unscoped).await?;
        }

        Ok(select_best(eligible))
    }

    async fn fetch_eligible(&self, movie_id: &str, pass: Pass) -> AppResult<Vec<VideoCandidate>> {
        let videos = self.catalog.movie_videos(movie_id, pass.scope()).await?;
        let total = videos.len();
        let eligible: Vec<VideoCandidate> =
            videos.into_iter().filter(VideoCandidate::is_eligible).collect();

        tracing::debug!(
            pass = ?pass,
            total,
            eligible = eligible.len(),
            "Video pass completed"
        );

        Ok(eligible)
    }
}

/// The unscoped pass runs exactly when the scoped pass left nothing eligible.
pub fn needs_fallback(eligible: &[VideoCandidate]) -> bool {
    eligible.is_empty()
}

/// Highest score wins; among equal scores the earlier candidate wins.
pub fn select_best(candidates: Vec<VideoCandidate>) -> Option<VideoCandidate> {
    let mut scored: Vec<(i64, VideoCandidate)> = candidates
        .into_iter()
        .map(|video| (score(&video), video))
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().next().map(|(_, video)| video)
}

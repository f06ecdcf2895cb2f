/// Movie catalog provider abstraction
///
/// The router and the trailer resolver only talk to the catalog through this
/// trait, so the TMDB client can be replaced by a fake in tests.
use crate::{
    error::AppResult,
    models::{LanguageScope, MoviePage, VideoCandidate},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie catalog providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Movies trending today
    async fn trending_movies(&self) -> AppResult<MoviePage>;

    /// Search movies by title. Callers are expected to reject blank queries.
    async fn search_movies(&self, query: &str) -> AppResult<MoviePage>;

    /// Videos attached to a movie, optionally scoped to a language/region
    ///
    /// Fails on transport errors and on any non-success status.
    async fn movie_videos(
        &self,
        movie_id: &str,
        scope: Option<LanguageScope>,
    ) -> AppResult<Vec<VideoCandidate>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

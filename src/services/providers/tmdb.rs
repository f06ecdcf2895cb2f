/// TMDB (The Movie Database) v3 API provider
///
/// Wraps the three read-only endpoints the client needs:
/// 1. Trending: /trending/movie/day
/// 2. Search: /search/movie?query=...
/// 3. Videos: /movie/{id}/videos[?language=en-US]
///
/// Authenticates with a v4 bearer token when configured, otherwise with a v3
/// `api_key` query parameter.
use crate::{
    config::{Config, Credentials},
    error::{AppError, AppResult},
    models::{LanguageScope, MoviePage, VideoCandidate, VideoList},
    services::providers::CatalogProvider,
};
use reqwest::{Client as HttpClient, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    credentials: Credentials,
    base_url: Url,
}

impl TmdbProvider {
    /// Creates a provider with a client-wide request timeout
    pub fn new(credentials: Credentials, api_url: &str, timeout: Duration) -> AppResult<Self> {
        let base_url = Url::parse(api_url)
            .map_err(|e| AppError::Config(format!("Invalid TMDB API URL {}: {}", api_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "Invalid TMDB API URL {}: not a base URL",
                api_url
            )));
        }

        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            credentials,
            base_url,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.credentials()?,
            &config.tmdb_api_url,
            config.request_timeout(),
        )
    }

    /// Appends path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, url: Url) -> RequestBuilder {
        let request = self.http_client.get(url);
        match &self.credentials {
            Credentials::Bearer(token) => request.bearer_auth(token),
            Credentials::ApiKey(key) => request.query(&[("api_key", key.as_str())]),
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn trending_movies(&self) -> AppResult<MoviePage> {
        let url = self.endpoint(&["trending", "movie", "day"]);
        let page: MoviePage = self.send(self.request(url)).await?;

        tracing::info!(
            results = page.result_count(),
            provider = self.name(),
            "Trending movies fetched"
        );

        Ok(page)
    }

    async fn search_movies(&self, query: &str) -> AppResult<MoviePage> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = self.endpoint(&["search", "movie"]);
        let request = self.request(url).query(&[("query", query)]);
        let page: MoviePage = self.send(request).await?;

        tracing::info!(
            query = %query,
            results = page.result_count(),
            provider = self.name(),
            "Movie search completed"
        );

        Ok(page)
    }

    async fn movie_videos(
        &self,
        movie_id: &str,
        scope: Option<LanguageScope>,
    ) -> AppResult<Vec<VideoCandidate>> {
        let url = self.endpoint(&["movie", movie_id, "videos"]);
        let mut request = self.request(url);
        if let Some(scope) = scope {
            request = request.query(&[("language", scope.to_string())]);
        }

        let videos: VideoList = self.send(request).await?;

        tracing::debug!(
            movie_id = %movie_id,
            scope = ?scope.map(|s| s.to_string()),
            results = videos.results.len(),
            provider = self.name(),
            "Movie videos fetched"
        );

        Ok(videos.results)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

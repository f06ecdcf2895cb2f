mod movie;
mod video;

pub use movie::MoviePage;
pub use video::{TrailerResponse, VideoCandidate, VideoList, VideoType, YOUTUBE_SITE};

/// Language/region pair used to scope catalog queries, e.g. `en-US`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageScope {
    pub language: &'static str,
    pub region: &'static str,
}

impl LanguageScope {
    pub const EN_US: LanguageScope = LanguageScope {
        language: "en",
        region: "US",
    };
}

/// Formats as TMDB's `language` query value
impl std::fmt::Display for LanguageScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.language, self.region)
    }
}

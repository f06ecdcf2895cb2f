use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One page of movies as returned by trending and search
///
/// Kept as the upstream JSON so the client sees every field TMDB sends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MoviePage(pub Value);

impl MoviePage {
    /// Page returned for a blank search, serialized as `{"results": []}`
    pub fn empty() -> Self {
        Self(json!({ "results": [] }))
    }

    /// Number of entries in `results`, zero when absent
    pub fn result_count(&self) -> usize {
        self.0
            .get("results")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

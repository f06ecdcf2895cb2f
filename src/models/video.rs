use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The only hosting platform the client can embed
pub const YOUTUBE_SITE: &str = "YouTube";

/// Category of a video asset, parsed from the upstream `type` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoType {
    Trailer,
    Teaser,
    Clip,
    Featurette,
    Other,
}

impl From<&str> for VideoType {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "trailer" => VideoType::Trailer,
            "teaser" => VideoType::Teaser,
            "clip" => VideoType::Clip,
            "featurette" => VideoType::Featurette,
            _ => VideoType::Other,
        }
    }
}

/// Reads a field, falling back to its default on `null` or an unexpected type
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// One video record attached to a movie, as returned by `/movie/{id}/videos`
///
/// Every field tolerates absence, `null` and wrong types so one sparse or
/// malformed record cannot fail the list; the scorer treats the defaults as
/// zero contribution.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoCandidate {
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub site: String,
    #[serde(default, rename = "type", deserialize_with = "or_default")]
    pub video_type: String,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub official: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub iso_639_1: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub iso_3166_1: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub published_at: Option<String>,
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub key: String,
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<u32>,
}

impl VideoCandidate {
    pub fn category(&self) -> VideoType {
        VideoType::from(self.video_type.as_str())
    }

    /// Whether the video is hosted somewhere the client can play it
    pub fn is_eligible(&self) -> bool {
        self.site == YOUTUBE_SITE
    }
}

/// Envelope of the videos endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoList {
    #[serde(default, deserialize_with = "records")]
    pub results: Vec<VideoCandidate>,
}

/// Decodes `results` record by record; entries that are not objects are dropped
fn records<'de, D>(deserializer: D) -> Result<Vec<VideoCandidate>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<Value> = or_default(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|value| VideoCandidate::deserialize(value).ok())
        .collect())
}

/// Body of `/api/trailer/:movie_id`. `trailer` is `null` when nothing eligible exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrailerResponse {
    pub trailer: Option<VideoCandidate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_type_is_case_insensitive() {
        assert_eq!(VideoType::from("Trailer"), VideoType::Trailer);
        assert_eq!(VideoType::from("TEASER"), VideoType::Teaser);
        assert_eq!(VideoType::from("clip"), VideoType::Clip);
        assert_eq!(VideoType::from("Featurette"), VideoType::Featurette);
        assert_eq!(VideoType::from("Behind the Scenes"), VideoType::Other);
        assert_eq!(VideoType::from(""), VideoType::Other);
    }

    #[test]
    fn test_tmdb_video_deserialization() {
        let json = r#"{
            "iso_639_1": "en",
            "iso_3166_1": "US",
            "name": "Official Trailer",
            "key": "YoHD9XEInc0",
            "site": "YouTube",
            "size": 1080,
            "type": "Trailer",
            "official": true,
            "published_at": "2010-05-11T16:00:07.000Z",
            "id": "533ec654c3a36854480003eb"
        }"#;

        let video: VideoCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(video.key, "YoHD9XEInc0");
        assert_eq!(video.category(), VideoType::Trailer);
        assert_eq!(video.iso_639_1.as_deref(), Some("en"));
        assert!(video.official);
        assert!(video.is_eligible());
    }

    #[test]
    fn test_sparse_video_deserialization() {
        let video: VideoCandidate = serde_json::from_str(r#"{"site": "Vimeo"}"#).unwrap();
        assert_eq!(video.category(), VideoType::Other);
        assert!(!video.official);
        assert!(video.published_at.is_none());
        assert!(!video.is_eligible());
    }

    fn list_with_teaser_after(record: &str) -> VideoList {
        let json = format!(
            r#"{{"id": 603, "results": [{}, {{
                "site": "YouTube",
                "type": "Teaser",
                "name": "Teaser",
                "official": true,
                "key": "teaser",
                "published_at": "2020-09-13T12:26:40.000Z"
            }}]}}"#,
            record
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_null_name_defaults_to_empty() {
        let list = list_with_teaser_after(
            r#"{"site": "YouTube", "type": "Trailer", "name": null, "key": "trailer"}"#,
        );
        assert_eq!(list.results.len(), 2);
        assert_eq!(list.results[0].name, "");
        assert_eq!(list.results[0].category(), VideoType::Trailer);
        assert_eq!(list.results[1].key, "teaser");
    }

    #[test]
    fn test_numeric_published_at_is_ignored() {
        let list = list_with_teaser_after(
            r#"{"site": "YouTube", "type": "Trailer", "published_at": 1600000000, "key": "trailer"}"#,
        );
        assert_eq!(list.results.len(), 2);
        assert!(list.results[0].published_at.is_none());
        assert!(list.results[1].official);
    }

    #[test]
    fn test_null_type_is_other() {
        let list = list_with_teaser_after(
            r#"{"site": "YouTube", "type": null, "official": "yes", "size": "big", "key": "x"}"#,
        );
        assert_eq!(list.results.len(), 2);
        assert_eq!(list.results[0].category(), VideoType::Other);
        assert!(!list.results[0].official);
        assert!(list.results[0].size.is_none());
    }

    #[test]
    fn test_non_object_records_are_dropped() {
        let list: VideoList = serde_json::from_str(
            r#"{"results": [null, 42, {"site": "YouTube", "key": "ok"}]}"#,
        )
        .unwrap();
        assert_eq!(list.results.len(), 1);
        assert_eq!(list.results[0].key, "ok");

        let list: VideoList = serde_json::from_str(r#"{"results": null}"#).unwrap();
        assert!(list.results.is_empty());
    }

    #[test]
    fn test_empty_trailer_serializes_as_null() {
        let body = serde_json::to_value(TrailerResponse { trailer: None }).unwrap();
        assert_eq!(body, serde_json::json!({ "trailer": null }));
    }

    #[test]
    fn test_trailer_keeps_upstream_field_names() {
        let video = VideoCandidate {
            site: YOUTUBE_SITE.to_string(),
            video_type: "Teaser".to_string(),
            key: "abc".to_string(),
            ..Default::default()
        };
        let body = serde_json::to_value(TrailerResponse {
            trailer: Some(video),
        })
        .unwrap();
        assert_eq!(body["trailer"]["type"], "Teaser");
        assert_eq!(body["trailer"]["site"], "YouTube");
        assert_eq!(body["trailer"]["key"], "abc");
    }
}

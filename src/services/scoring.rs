//! Ranking of candidate videos for the trailer endpoint.
//!
//! The score is a sum of independent, non-negative bonuses. Recency only
//! contributes one point per billion milliseconds (~11.6 days), so it orders
//! videos published close together without outweighing their category.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{VideoCandidate, VideoType};

const OFFICIAL_BONUS: i64 = 25;
const NAME_OFFICIAL_BONUS: i64 = 10;
const NAME_TRAILER_BONUS: i64 = 8;
const ENGLISH_BONUS: i64 = 5;
const PREFERRED_LANGUAGE: &str = "en";

const RECENCY_DIVISOR_MS: i64 = 1_000_000_000;
/// Bonus of 2100-01-01T00:00:00Z; later timestamps are capped here.
pub const MAX_RECENCY_BONUS: i64 = 4_102_444_800_000 / RECENCY_DIVISOR_MS;

fn type_bonus(video_type: VideoType) -> i64 {
    match video_type {
        VideoType::Trailer => 100,
        VideoType::Teaser => 60,
        VideoType::Clip => 30,
        VideoType::Featurette => 20,
        VideoType::Other => 0,
    }
}

/// Parses an upstream timestamp. Accepts RFC 3339 and bare dates (midnight UTC).
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `published_at`, falling back to `created_at`, falling back to the epoch.
fn recency_bonus(video: &VideoCandidate) -> i64 {
    let millis = parse_timestamp(video.published_at.as_deref())
        .or_else(|| parse_timestamp(video.created_at.as_deref()))
        .map(|ts| ts.timestamp_millis())
        .unwrap_or(0);

    millis
        .div_euclid(RECENCY_DIVISOR_MS)
        .clamp(0, MAX_RECENCY_BONUS)
}

/// Rank of a single candidate; higher is better.
pub fn score(video: &VideoCandidate) -> i64 {
    let name = video.name.to_lowercase();
    let mut total = type_bonus(video.category());

    if video.official {
        total += OFFICIAL_BONUS;
    }
    if name.contains("official") {
        total += NAME_OFFICIAL_BONUS;
    }
    if name.contains("trailer") {
        total += NAME_TRAILER_BONUS;
    }
    if video.iso_639_1.as_deref() == Some(PREFERRED_LANGUAGE) {
        total += ENGLISH_BONUS;
    }

    total + recency_bonus(video)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(video_type: &str) -> VideoCandidate {
        VideoCandidate {
            site: "YouTube".to_string(),
            video_type: video_type.to_string(),
            key: "k".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_bare_candidate_scores_type_only() {
        assert_eq!(score(&video("Trailer")), 100);
        assert_eq!(score(&video("Teaser")), 60);
        assert_eq!(score(&video("Clip")), 30);
        assert_eq!(score(&video("Featurette")), 20);
        assert_eq!(score(&video("Bloopers")), 0);
    }

    #[test]
    fn test_type_ordering() {
        let scores: Vec<i64> = ["trailer", "teaser", "clip", "featurette", "other"]
            .iter()
            .map(|t| score(&video(t)))
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_official_flag_strictly_increases_score() {
        for t in ["Trailer", "Teaser", "Clip", "Featurette", "Other"] {
            let plain = video(t);
            let official = VideoCandidate {
                official: true,
                ..plain.clone()
            };
            assert!(score(&official) > score(&plain), "type {t}");
        }
    }

    #[test]
    fn test_name_cues_stack() {
        let mut v = video("Other");
        v.name = "OFFICIAL Trailer #2".to_string();
        assert_eq!(score(&v), 18);

        v.name = "Trailer".to_string();
        assert_eq!(score(&v), 8);

        v.name = String::new();
        assert_eq!(score(&v), 0);
    }

    #[test]
    fn test_english_bonus_requires_exact_code() {
        let mut v = video("Other");
        v.iso_639_1 = Some("en".to_string());
        assert_eq!(score(&v), 5);

        v.iso_639_1 = Some("fr".to_string());
        assert_eq!(score(&v), 0);
    }

    #[test]
    fn test_recency_uses_billion_ms_buckets() {
        let mut v = video("Other");
        // 1_600_000_000_000 ms
        v.published_at = Some("2020-09-13T12:26:40.000Z".to_string());
        assert_eq!(score(&v), 1600);

        v.published_at = Some("2020-09-13".to_string());
        assert_eq!(score(&v), 1599);
    }

    #[test]
    fn test_recency_falls_back_to_created_at() {
        let mut v = video("Other");
        v.published_at = Some("not a date".to_string());
        v.created_at = Some("2020-09-13T12:26:40Z".to_string());
        assert_eq!(score(&v), 1600);

        v.created_at = Some("".to_string());
        assert_eq!(score(&v), 0);
    }

    #[test]
    fn test_recency_is_clamped() {
        let mut v = video("Other");
        v.published_at = Some("9999-12-31T23:59:59Z".to_string());
        assert_eq!(score(&v), MAX_RECENCY_BONUS);

        v.published_at = Some("1960-01-01T00:00:00Z".to_string());
        assert_eq!(score(&v), 0);
    }

    #[test]
    fn test_recency_separates_same_type() {
        let mut older = video("Trailer");
        older.published_at = Some("2023-01-01T00:00:00Z".to_string());
        let mut newer = older.clone();
        newer.published_at = Some("2023-03-01T00:00:00Z".to_string());
        assert!(score(&newer) > score(&older));
    }
}

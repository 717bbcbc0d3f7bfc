//! Candidate data model and matcher wire types.

use serde::{Deserialize, Serialize};

use crate::engine::normalize::RatingRange;

/// One scored candidate as returned by the match endpoint.
///
/// Immutable from the engine's perspective: ranking never mutates candidates,
/// it returns a newly ordered sequence. `min_rating`/`max_rating` carry the
/// range the rating was produced under, so percentage-based sorting can
/// normalize per candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<f64>,
}

impl Candidate {
    pub fn new(
        name: impl Into<String>,
        filename: impl Into<String>,
        summary: impl Into<String>,
        rating: f64,
        range: RatingRange,
    ) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
            summary: summary.into(),
            rating,
            min_rating: Some(range.min),
            max_rating: Some(range.max),
        }
    }
}

/// Request body for `POST /api/candidate-matcher/match`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub vacancy_description: String,
}

/// Response body for `GET /api/rating/config`.
#[derive(Debug, Clone, Serialize)]
pub struct RatingConfigResponse {
    pub min: f64,
    pub max: f64,
    pub description: String,
}

impl From<RatingRange> for RatingConfigResponse {
    fn from(range: RatingRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
            description: range.description(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_serializes_camel_case() {
        let candidate = Candidate::new("Ada", "ada.txt", "Strong fit.", 8.0, RatingRange::default());
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["minRating"], 1.0);
        assert_eq!(json["maxRating"], 10.0);
        assert_eq!(json["filename"], "ada.txt");
    }

    #[test]
    fn test_candidate_tolerates_missing_fields() {
        let candidate: Candidate = serde_json::from_str(r#"{"rating": 7}"#).unwrap();
        assert_eq!(candidate.rating, 7.0);
        assert_eq!(candidate.name, "");
        assert!(candidate.min_rating.is_none());
    }

    #[test]
    fn test_rating_config_response_from_range() {
        let response = RatingConfigResponse::from(RatingRange::default());
        assert_eq!(response.min, 1.0);
        assert_eq!(response.max, 10.0);
        assert_eq!(response.description, "1 to 10");
    }
}

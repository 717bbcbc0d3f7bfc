//! Candidate ranking — stable single- and multi-criterion ordering.
//!
//! All comparisons run an ascending comparator; `desc` reverses its result
//! rather than running a different comparator, so the two orders are exact
//! mirrors for pairwise-distinct keys. Sorting is stable: candidates that tie
//! across every criterion keep their original relative order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::engine::normalize::normalize;
use crate::models::candidate::Candidate;

// ────────────────────────────────────────────────────────────────────────────
// Criteria
// ────────────────────────────────────────────────────────────────────────────

/// The sortable candidate fields.
///
/// Unknown field names arriving on the wire deserialize to `Unknown`, which
/// compares every pair as a tie — a skipped criterion, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Rating,
    Name,
    Filename,
    Percentage,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// A single `(field, order)` ranking key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
    pub field: SortField,
    #[serde(default)]
    pub order: SortOrder,
}

impl SortCriterion {
    /// The default full-sort criterion: best rating first.
    pub fn rating_desc() -> Self {
        Self {
            field: SortField::Rating,
            order: SortOrder::Desc,
        }
    }
}

/// The eight fixed sort options exposed to the dashboard's sort selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    #[default]
    RatingDesc,
    RatingAsc,
    NameAsc,
    NameDesc,
    FilenameAsc,
    FilenameDesc,
    PercentageDesc,
    PercentageAsc,
}

impl SortOption {
    /// Resolves a sort-option identifier, e.g. `"rating-desc"`.
    /// Unrecognized identifiers degrade to the default rating-descending.
    pub fn from_key(key: &str) -> SortOption {
        match key {
            "rating-desc" => SortOption::RatingDesc,
            "rating-asc" => SortOption::RatingAsc,
            "name-asc" => SortOption::NameAsc,
            "name-desc" => SortOption::NameDesc,
            "filename-asc" => SortOption::FilenameAsc,
            "filename-desc" => SortOption::FilenameDesc,
            "percentage-desc" => SortOption::PercentageDesc,
            "percentage-asc" => SortOption::PercentageAsc,
            _ => SortOption::default(),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SortOption::RatingDesc => "rating-desc",
            SortOption::RatingAsc => "rating-asc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::FilenameAsc => "filename-asc",
            SortOption::FilenameDesc => "filename-desc",
            SortOption::PercentageDesc => "percentage-desc",
            SortOption::PercentageAsc => "percentage-asc",
        }
    }

    pub fn criterion(self) -> SortCriterion {
        let (field, order) = match self {
            SortOption::RatingDesc => (SortField::Rating, SortOrder::Desc),
            SortOption::RatingAsc => (SortField::Rating, SortOrder::Asc),
            SortOption::NameAsc => (SortField::Name, SortOrder::Asc),
            SortOption::NameDesc => (SortField::Name, SortOrder::Desc),
            SortOption::FilenameAsc => (SortField::Filename, SortOrder::Asc),
            SortOption::FilenameDesc => (SortField::Filename, SortOrder::Desc),
            SortOption::PercentageDesc => (SortField::Percentage, SortOrder::Desc),
            SortOption::PercentageAsc => (SortField::Percentage, SortOrder::Asc),
        };
        SortCriterion { field, order }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sorting
// ────────────────────────────────────────────────────────────────────────────

/// Orders candidates by a single criterion. Returns a new vector; the input
/// is never mutated. Empty input is an identity no-op.
pub fn sort_by(candidates: &[Candidate], criterion: SortCriterion) -> Vec<Candidate> {
    sort_by_many(candidates, std::slice::from_ref(&criterion))
}

/// Orders candidates by several criteria in priority order.
///
/// The first criterion that compares non-equal decides the pair (sign-adjusted
/// per that criterion's order); an all-criteria tie preserves the original
/// relative order. An empty criteria list applies the default rating-desc.
pub fn sort_by_many(candidates: &[Candidate], criteria: &[SortCriterion]) -> Vec<Candidate> {
    let mut ordered = candidates.to_vec();
    if ordered.is_empty() {
        return ordered;
    }

    let default = [SortCriterion::rating_desc()];
    let criteria = if criteria.is_empty() {
        &default[..]
    } else {
        criteria
    };

    // Vec::sort_by is stable, which is what makes the tie-break rules hold.
    ordered.sort_by(|a, b| {
        for criterion in criteria {
            let comparison = compare_field(a, b, criterion.field);
            if comparison != Ordering::Equal {
                return match criterion.order {
                    SortOrder::Asc => comparison,
                    SortOrder::Desc => comparison.reverse(),
                };
            }
        }
        Ordering::Equal
    });
    ordered
}

/// Ascending comparison of one field. `Unknown` is an automatic tie.
fn compare_field(a: &Candidate, b: &Candidate, field: SortField) -> Ordering {
    match field {
        SortField::Rating => finite_or_zero(a.rating).total_cmp(&finite_or_zero(b.rating)),
        SortField::Name => compare_text(&a.name, &b.name),
        SortField::Filename => compare_text(&a.filename, &b.filename),
        SortField::Percentage => candidate_percentage(a).total_cmp(&candidate_percentage(b)),
        SortField::Unknown => Ordering::Equal,
    }
}

/// Case-insensitive text ordering. Missing values are already empty strings.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Percentage under the candidate's own range, defaulting to `[0, 100]` for
/// candidates that carry no range.
fn candidate_percentage(candidate: &Candidate) -> f64 {
    normalize(
        candidate.rating,
        candidate.min_rating.unwrap_or(0.0),
        candidate.max_rating.unwrap_or(100.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(name: &str, rating: f64) -> Candidate {
        Candidate {
            name: name.to_string(),
            filename: format!("{}.txt", name.to_lowercase()),
            rating,
            ..Candidate::default()
        }
    }

    fn ratings(candidates: &[Candidate]) -> Vec<f64> {
        candidates.iter().map(|c| c.rating).collect()
    }

    fn names(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_rating_desc_orders_best_first() {
        let candidates = vec![rated("A", 5.0), rated("B", 8.0), rated("C", 2.0)];
        let ordered = sort_by(&candidates, SortOption::RatingDesc.criterion());
        assert_eq!(ratings(&ordered), vec![8.0, 5.0, 2.0]);
        // Input untouched.
        assert_eq!(ratings(&candidates), vec![5.0, 8.0, 2.0]);
    }

    #[test]
    fn test_rating_asc_is_exact_reverse_of_desc() {
        let candidates = vec![
            rated("A", 3.0),
            rated("B", 9.0),
            rated("C", 1.0),
            rated("D", 6.0),
        ];
        let desc = sort_by(&candidates, SortOption::RatingDesc.criterion());
        let mut asc = sort_by(&candidates, SortOption::RatingAsc.criterion());
        asc.reverse();
        assert_eq!(ratings(&desc), ratings(&asc));
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let candidates = vec![rated("charlie", 1.0), rated("Alice", 2.0), rated("Bob", 3.0)];
        let ordered = sort_by(&candidates, SortOption::NameAsc.criterion());
        assert_eq!(names(&ordered), vec!["Alice", "Bob", "charlie"]);
    }

    #[test]
    fn test_filename_sort_desc() {
        let candidates = vec![rated("A", 1.0), rated("C", 2.0), rated("B", 3.0)];
        let ordered = sort_by(&candidates, SortOption::FilenameDesc.criterion());
        assert_eq!(names(&ordered), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_percentage_sort_uses_per_candidate_range() {
        // 8/[1,10] ≈ 77.8% beats 40/[0,100] = 40%.
        let mut narrow = rated("Narrow", 8.0);
        narrow.min_rating = Some(1.0);
        narrow.max_rating = Some(10.0);
        let wide = rated("Wide", 40.0);

        let ordered = sort_by(&[wide, narrow], SortOption::PercentageDesc.criterion());
        assert_eq!(names(&ordered), vec!["Narrow", "Wide"]);
    }

    #[test]
    fn test_non_finite_rating_sorts_as_zero() {
        let candidates = vec![rated("A", f64::NAN), rated("B", -1.0), rated("C", 1.0)];
        let ordered = sort_by(&candidates, SortOption::RatingAsc.criterion());
        assert_eq!(names(&ordered), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_empty_input_is_identity() {
        let empty: Vec<Candidate> = vec![];
        assert!(sort_by(&empty, SortOption::RatingDesc.criterion()).is_empty());
        assert!(sort_by_many(&empty, &[]).is_empty());
    }

    #[test]
    fn test_multi_criterion_tie_break_by_name() {
        let candidates = vec![
            rated("Zoe", 8.0),
            rated("Amy", 8.0),
            rated("Max", 9.0),
            rated("Ben", 8.0),
        ];
        let ordered = sort_by_many(
            &candidates,
            &[
                SortCriterion {
                    field: SortField::Rating,
                    order: SortOrder::Desc,
                },
                SortCriterion {
                    field: SortField::Name,
                    order: SortOrder::Asc,
                },
            ],
        );
        assert_eq!(names(&ordered), vec!["Max", "Amy", "Ben", "Zoe"]);
    }

    #[test]
    fn test_all_criteria_tie_preserves_original_order() {
        let mut first = rated("Same", 5.0);
        first.filename = "first.txt".to_string();
        let mut second = rated("Same", 5.0);
        second.filename = "second.txt".to_string();

        let ordered = sort_by_many(
            &[first.clone(), second.clone()],
            &[
                SortCriterion {
                    field: SortField::Rating,
                    order: SortOrder::Desc,
                },
                SortCriterion {
                    field: SortField::Name,
                    order: SortOrder::Asc,
                },
            ],
        );
        assert_eq!(ordered[0].filename, "first.txt");
        assert_eq!(ordered[1].filename, "second.txt");
    }

    #[test]
    fn test_unknown_field_is_skipped_as_tie() {
        let candidates = vec![rated("Low", 2.0), rated("High", 7.0)];
        let ordered = sort_by_many(
            &candidates,
            &[
                SortCriterion {
                    field: SortField::Unknown,
                    order: SortOrder::Desc,
                },
                SortCriterion {
                    field: SortField::Rating,
                    order: SortOrder::Desc,
                },
            ],
        );
        assert_eq!(names(&ordered), vec!["High", "Low"]);
    }

    #[test]
    fn test_unknown_wire_field_deserializes_to_unknown() {
        let criterion: SortCriterion =
            serde_json::from_str(r#"{"field": "popularity", "order": "asc"}"#).unwrap();
        assert_eq!(criterion.field, SortField::Unknown);

        let criterion: SortCriterion = serde_json::from_str(r#"{"field": "rating"}"#).unwrap();
        assert_eq!(criterion.order, SortOrder::Desc);
    }

    #[test]
    fn test_empty_criteria_defaults_to_rating_desc() {
        let candidates = vec![rated("A", 1.0), rated("B", 9.0)];
        let ordered = sort_by_many(&candidates, &[]);
        assert_eq!(names(&ordered), vec!["B", "A"]);
    }

    #[test]
    fn test_unrecognized_sort_option_falls_back_to_rating_desc() {
        assert_eq!(SortOption::from_key("shoe-size"), SortOption::RatingDesc);
        assert_eq!(SortOption::from_key(""), SortOption::RatingDesc);
        assert_eq!(
            SortOption::from_key("percentage-asc"),
            SortOption::PercentageAsc
        );
    }

    #[test]
    fn test_sort_option_keys_round_trip() {
        for option in [
            SortOption::RatingDesc,
            SortOption::RatingAsc,
            SortOption::NameAsc,
            SortOption::NameDesc,
            SortOption::FilenameAsc,
            SortOption::FilenameDesc,
            SortOption::PercentageDesc,
            SortOption::PercentageAsc,
        ] {
            assert_eq!(SortOption::from_key(option.key()), option);
        }
    }
}

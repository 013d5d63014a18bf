//! Score ranking and threshold filtering

use crate::label::{EmailLabel, LABEL_PARSE_ERROR, LABEL_UNCLEAR};
use crate::prediction::{RawPrediction, ScoredLabel};
use std::cmp::Ordering;

/// Minimum score a prediction must exceed (strictly) to appear in the
/// detailed prediction list.
pub const SCORE_THRESHOLD: f64 = 0.4;

/// Detailed-list entry substituted when no prediction clears the threshold.
const NO_PREDICTION_SENTINEL: &str = "No clear prediction above threshold";

/// Detailed-list entry substituted when the upstream response shape is invalid.
const PARSE_ERROR_SENTINEL: &str = "AI response structure invalid";

/// The outcome of ranking, filtering and remapping one zero-shot response.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Highest-scoring label after remapping, or a sentinel label
    pub primary_label: String,

    /// Score of the highest-scoring prediction
    pub primary_score: f64,

    /// Above-threshold predictions, remapped, score descending. Never empty.
    pub detailed: Vec<ScoredLabel>,
}

impl Classification {
    /// Outcome when no prediction cleared the threshold.
    pub fn unclear() -> Self {
        Self {
            primary_label: LABEL_UNCLEAR.to_string(),
            primary_score: 0.0,
            detailed: vec![ScoredLabel {
                label: NO_PREDICTION_SENTINEL.to_string(),
                score: 0.0,
            }],
        }
    }

    /// Outcome when the upstream response was 2xx but structurally invalid.
    pub fn parse_error() -> Self {
        Self {
            primary_label: LABEL_PARSE_ERROR.to_string(),
            primary_score: 0.0,
            detailed: vec![ScoredLabel {
                label: PARSE_ERROR_SENTINEL.to_string(),
                score: 0.0,
            }],
        }
    }
}

/// Rank raw predictions by score and derive the primary and detailed results.
///
/// Sorting is stable, so predictions with equal scores keep their original
/// relative order; scores that do not compare (NaN) are left in place. The
/// primary prediction is the highest-scoring entry regardless of threshold,
/// but if nothing exceeds [`SCORE_THRESHOLD`] the whole outcome collapses to
/// [`Classification::unclear`].
pub fn rank_predictions(mut raw: Vec<RawPrediction>) -> Classification {
    raw.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let Some(top) = raw.first() else {
        return Classification::unclear();
    };

    let primary_label = EmailLabel::from_zero_shot(&top.label).to_string();
    let primary_score = top.score;

    let detailed: Vec<ScoredLabel> = raw
        .iter()
        .filter(|p| p.score > SCORE_THRESHOLD)
        .map(|p| ScoredLabel {
            label: EmailLabel::from_zero_shot(&p.label).to_string(),
            score: p.score,
        })
        .collect();

    if detailed.is_empty() {
        return Classification::unclear();
    }

    Classification {
        primary_label,
        primary_score,
        detailed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(label: &str, score: f64) -> RawPrediction {
        RawPrediction {
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn sorts_by_score_descending_and_remaps() {
        let outcome = rank_predictions(vec![
            raw("newsletter", 0.55),
            raw("phishing attempt", 0.92),
            raw("spam email", 0.81),
        ]);

        assert_eq!(outcome.primary_label, "PHISHING");
        assert_eq!(outcome.primary_score, 0.92);
        assert_eq!(
            outcome
                .detailed
                .iter()
                .map(|p| p.label.as_str())
                .collect::<Vec<_>>(),
            vec!["PHISHING", "SPAM", "NEWSLETTER"]
        );
        let scores: Vec<f64> = outcome.detailed.iter().map(|p| p.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn filters_at_threshold_strictly() {
        let outcome = rank_predictions(vec![
            raw("spam email", 0.9),
            raw("newsletter", 0.4),
            raw("promotional offer", 0.39),
        ]);

        assert_eq!(outcome.detailed.len(), 1);
        assert_eq!(outcome.detailed[0].label, "SPAM");
        assert!(outcome.detailed.iter().all(|p| p.score > SCORE_THRESHOLD));
    }

    #[test]
    fn equal_scores_keep_original_order() {
        let outcome = rank_predictions(vec![
            raw("newsletter", 0.5),
            raw("spam email", 0.5),
            raw("phishing attempt", 0.5),
        ]);

        assert_eq!(
            outcome
                .detailed
                .iter()
                .map(|p| p.label.as_str())
                .collect::<Vec<_>>(),
            vec!["NEWSLETTER", "SPAM", "PHISHING"]
        );
    }

    #[test]
    fn nothing_above_threshold_is_unclear() {
        let outcome = rank_predictions(vec![
            raw("spam email", 0.3),
            raw("newsletter", 0.2),
        ]);

        assert_eq!(outcome.primary_label, "UNCLEAR");
        assert_eq!(outcome.primary_score, 0.0);
        assert_eq!(outcome.detailed.len(), 1);
        assert_eq!(outcome.detailed[0].label, "No clear prediction above threshold");
        assert_eq!(outcome.detailed[0].score, 0.0);
    }

    #[test]
    fn empty_input_is_unclear() {
        let outcome = rank_predictions(vec![]);
        assert_eq!(outcome.primary_label, "UNCLEAR");
        assert!(!outcome.detailed.is_empty());
    }

    #[test]
    fn unrecognized_labels_survive_as_other() {
        let outcome = rank_predictions(vec![raw("weather report", 0.8)]);
        assert_eq!(outcome.primary_label, "OTHER");
        assert_eq!(outcome.detailed[0].label, "OTHER");
    }

    #[test]
    fn parse_error_outcome_shape() {
        let outcome = Classification::parse_error();
        assert_eq!(outcome.primary_label, "AI_PARSE_ERROR");
        assert_eq!(outcome.primary_score, 0.0);
        assert_eq!(outcome.detailed.len(), 1);
        assert_eq!(outcome.detailed[0].label, "AI response structure invalid");
    }

    #[test]
    fn scored_label_wire_shape() {
        let entry = ScoredLabel {
            label: "SPAM".to_string(),
            score: 0.9,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"label": "SPAM", "score": 0.9}));
    }
}

//! Transient prediction types
//!
//! All of these exist only within one request's processing; nothing is
//! persisted across requests.

use serde::{Deserialize, Serialize};

/// A single (label, score) pair as returned by the zero-shot classifier,
/// before remapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPrediction {
    /// Raw label from the upstream candidate vocabulary
    pub label: String,

    /// Confidence score in [0, 1]
    pub score: f64,
}

/// A remapped (label, score) pair included in the detailed prediction list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLabel {
    /// Application label, or a sentinel description
    pub label: String,

    /// Confidence score in [0, 1]
    pub score: f64,
}

/// A named entity recognized by the upstream entity-recognition model.
///
/// Field names match the upstream wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPrediction {
    /// Entity type, e.g. "EMAIL_ADDRESS" or "IP_ADDRESS"
    pub entity_group: String,

    /// Confidence score in [0, 1]
    pub score: f64,

    /// The matched text span
    pub word: String,

    /// Start offset into the analyzed input
    pub start: usize,

    /// End offset into the analyzed input
    pub end: usize,
}

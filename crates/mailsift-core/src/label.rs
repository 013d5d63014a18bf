//! Email label vocabulary and zero-shot remapping

use serde::{Deserialize, Serialize};
use std::fmt;

/// Candidate labels sent to the upstream zero-shot classifier, in the order
/// they are submitted. Each maps to one [`EmailLabel`] variant.
pub const CANDIDATE_LABELS: [&str; 8] = [
    "spam email",
    "phishing attempt",
    "promotional offer",
    "newsletter",
    "transactional message",
    "legitimate communication",
    "suspicious email",
    "social media notification",
];

/// Sentinel label for responses where no prediction cleared the threshold.
pub const LABEL_UNCLEAR: &str = "UNCLEAR";

/// Sentinel label for responses where the upstream call failed.
pub const LABEL_API_ERROR: &str = "API_ERROR";

/// Sentinel label for upstream responses with an unexpected shape.
pub const LABEL_PARSE_ERROR: &str = "AI_PARSE_ERROR";

/// Application-level email classification label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailLabel {
    Spam,
    Phishing,
    Promotional,
    Newsletter,
    Transactional,
    /// Legitimate, non-spam communication.
    Ham,
    Suspicious,
    SocialMedia,
    /// Any label outside the known zero-shot vocabulary.
    Other,
}

impl EmailLabel {
    /// Map a raw zero-shot classifier label to an application label.
    ///
    /// Total over all strings: unrecognized input maps to [`EmailLabel::Other`].
    /// Matching is case-insensitive.
    pub fn from_zero_shot(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "spam email" => Self::Spam,
            "phishing attempt" => Self::Phishing,
            "promotional offer" => Self::Promotional,
            "newsletter" => Self::Newsletter,
            "transactional message" => Self::Transactional,
            "legitimate communication" => Self::Ham,
            "suspicious email" => Self::Suspicious,
            "social media notification" => Self::SocialMedia,
            _ => Self::Other,
        }
    }

    /// Wire representation of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spam => "SPAM",
            Self::Phishing => "PHISHING",
            Self::Promotional => "PROMOTIONAL",
            Self::Newsletter => "NEWSLETTER",
            Self::Transactional => "TRANSACTIONAL",
            Self::Ham => "HAM",
            Self::Suspicious => "SUSPICIOUS",
            Self::SocialMedia => "SOCIAL_MEDIA",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for EmailLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! PII entity classification and risk escalation

use mailsift_core::EntityPrediction;
use serde::{Deserialize, Serialize};

/// Entity types requested from the upstream entity-recognition model.
pub const PII_LABELS: [&str; 10] = [
    "EMAIL_ADDRESS",
    "IP_ADDRESS",
    "URL",
    "PHONE_NUMBER",
    "CREDIT_CARD_NUMBER",
    "PERSON",
    "LOCATION",
    "ORGANIZATION",
    "DATE",
    "TIME",
];

/// Entity groups that escalate a PII finding to potentially malicious.
const ESCALATION_GROUPS: [&str; 2] = ["IP_ADDRESS", "EMAIL_ADDRESS"];

/// Outcome status of a domain safety check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainStatus {
    /// Input failed syntactic validation; no upstream call was made
    InvalidFormat,
    /// No PII entities recognized
    Clean,
    /// PII entities recognized
    PiiDetected,
    /// PII entities recognized, including IP or email addresses
    PotentiallyMaliciousPii,
    /// Upstream call failed
    Error,
}

/// Verdict for one domain safety check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainVerdict {
    pub status: DomainStatus,
    pub message: String,
    /// Highest entity score, or 1.0 when nothing was found
    pub confidence: f64,
}

/// Classify the entities recognized in a domain/URL string.
///
/// An empty slice is a clean result with full confidence. Otherwise the
/// verdict lists every entity with its matched text and score, and the
/// presence of any escalation group upgrades the status.
pub fn classify_entities(entities: &[EntityPrediction]) -> DomainVerdict {
    if entities.is_empty() {
        return DomainVerdict {
            status: DomainStatus::Clean,
            message: "No specific PII entities found in the domain/URL.".to_string(),
            confidence: 1.0,
        };
    }

    let detected = entities
        .iter()
        .map(|e| format!("{}: '{}' (score: {:.2})", e.entity_group, e.word, e.score))
        .collect::<Vec<_>>()
        .join(", ");

    let confidence = entities.iter().fold(0.0_f64, |acc, e| acc.max(e.score));

    let escalated = entities
        .iter()
        .any(|e| ESCALATION_GROUPS.contains(&e.entity_group.as_str()));

    if escalated {
        DomainVerdict {
            status: DomainStatus::PotentiallyMaliciousPii,
            message: format!("Detected potentially malicious PII (like IP/Email): {detected}"),
            confidence,
        }
    } else {
        DomainVerdict {
            status: DomainStatus::PiiDetected,
            message: format!("Detected PII entities: {detected}"),
            confidence,
        }
    }
}

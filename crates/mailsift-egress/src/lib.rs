//! MailSift Egress Connector
//!
//! This crate provides the connector to the hosted inference API:
//! - Zero-shot text classification (email flow)
//! - Entity recognition (domain flow)

pub mod client;
pub mod inference;

pub use client::{HttpClientConfig, create_client};
pub use inference::{InferenceClient, InferenceConfig};

use thiserror::Error;

/// Errors raised while calling the upstream inference API.
#[derive(Debug, Error)]
pub enum EgressError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status_code}: {body}")]
    Upstream { status_code: u16, body: String },

    #[error("Failed to parse upstream response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EgressError {
    /// Upstream HTTP status code, when the failure carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Upstream { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Human-readable message suitable for returning to API clients.
    ///
    /// Distinguishes authentication failures, rate limiting, malformed
    /// requests and upstream unavailability; everything else gets a generic
    /// message that names the failure kind.
    pub fn user_message(&self) -> String {
        match self {
            Self::Upstream { status_code: 401, .. } => {
                "AI service authentication failed. Check your Hugging Face API token.".to_string()
            }
            Self::Upstream { status_code: 429, .. } => {
                "AI service rate limit exceeded. Please try again later.".to_string()
            }
            Self::Upstream { status_code, body } if (400..500).contains(status_code) => {
                format!(
                    "Invalid request to AI service. Check input format or model compatibility. Details: {body}"
                )
            }
            Self::Upstream { body, .. } => {
                format!(
                    "AI service internal error. Service might be temporarily unavailable. Details: {body}"
                )
            }
            Self::Http(err) => {
                let kind = if err.is_timeout() {
                    "timeout"
                } else if err.is_connect() {
                    "connection error"
                } else {
                    "transport error"
                };
                format!("An unexpected error occurred while calling the AI service ({kind}): {err}")
            }
            Self::Parse(msg) => {
                format!("AI response could not be interpreted: {msg}")
            }
            Self::Config(msg) => {
                format!("AI service is misconfigured: {msg}")
            }
        }
    }
}

/// Egress result type
pub type Result<T> = std::result::Result<T, EgressError>;

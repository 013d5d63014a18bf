//! MailSift PII Screening
//!
//! This crate provides the domain/URL safety pieces:
//! - Syntactic domain/URL format validation
//! - PII entity classification and risk escalation

pub mod escalation;
pub mod validator;

pub use escalation::{DomainStatus, DomainVerdict, PII_LABELS, classify_entities};
pub use validator::is_valid_domain;

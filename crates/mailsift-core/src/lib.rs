//! MailSift Core Types and Classification Logic
//!
//! This crate provides the pieces shared by both analysis flows:
//! - The email label vocabulary and zero-shot label remapping
//! - Score ranking and threshold filtering
//! - Transient prediction types exchanged with the upstream classifier

pub mod label;
pub mod prediction;
pub mod ranking;

pub use label::{CANDIDATE_LABELS, EmailLabel, LABEL_API_ERROR, LABEL_PARSE_ERROR, LABEL_UNCLEAR};
pub use prediction::{EntityPrediction, RawPrediction, ScoredLabel};
pub use ranking::{Classification, SCORE_THRESHOLD, rank_predictions};

//! MailSift Ingress Adapters
//!
//! This crate provides the HTTP surface consumed by the frontend:
//! - `POST /api/analyze` — email classification
//! - `POST /api/domain/check` — domain/URL safety check
//! - `GET /healthz`, `GET /readyz` — liveness and readiness probes

pub mod analyze;
pub mod domain_check;
pub mod health;
pub mod middleware;
pub mod types;

pub use types::RequestId;

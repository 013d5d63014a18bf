//! Domain/URL safety check ingress adapter

use axum::{
    Router,
    extract::{Json, State},
    routing::post,
};
use mailsift_egress::InferenceClient;
use mailsift_pii::{DomainStatus, DomainVerdict, PII_LABELS, classify_entities, is_valid_domain};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Domain safety check request
#[derive(Debug, Clone, Deserialize)]
pub struct DomainCheckRequest {
    pub domain: String,
}

/// Domain safety check response
#[derive(Debug, Clone, Serialize)]
pub struct DomainCheckResponse {
    pub domain: String,
    pub status: DomainStatus,
    pub message: String,
    pub confidence: f64,
}

impl DomainCheckResponse {
    fn from_verdict(domain: String, verdict: DomainVerdict) -> Self {
        Self {
            domain,
            status: verdict.status,
            message: verdict.message,
            confidence: verdict.confidence,
        }
    }
}

/// Create the domain check router
pub fn router(client: Arc<InferenceClient>) -> Router {
    Router::new()
        .route("/api/domain/check", post(check_domain))
        .with_state(client)
}

/// Screen one domain/URL for PII through the upstream entity-recognition
/// model.
///
/// Invalid input short-circuits before any upstream call; upstream failures
/// are absorbed into a 200 response with status ERROR.
async fn check_domain(
    State(client): State<Arc<InferenceClient>>,
    Json(request): Json<DomainCheckRequest>,
) -> Json<DomainCheckResponse> {
    info!(domain = %request.domain, "checking domain safety");

    if !is_valid_domain(&request.domain) {
        return Json(DomainCheckResponse {
            domain: request.domain,
            status: DomainStatus::InvalidFormat,
            message: "The provided domain or URL format is invalid.".to_string(),
            confidence: 0.0,
        });
    }

    let response = match client.extract_entities(&request.domain, &PII_LABELS).await {
        Ok(entities) => {
            let verdict = classify_entities(&entities);
            DomainCheckResponse::from_verdict(request.domain, verdict)
        }
        Err(err) => {
            warn!(error = %err, "entity recognition call failed");
            DomainCheckResponse {
                domain: request.domain,
                status: DomainStatus::Error,
                message: err.user_message(),
                confidence: 0.0,
            }
        }
    };

    Json(response)
}

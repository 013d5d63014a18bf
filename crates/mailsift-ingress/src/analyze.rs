//! Email analysis ingress adapter

use axum::{
    Router,
    extract::{Json, State},
    routing::post,
};
use mailsift_core::{
    CANDIDATE_LABELS, Classification, LABEL_API_ERROR, ScoredLabel, rank_predictions,
};
use mailsift_egress::{EgressError, InferenceClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Email analysis request
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub sender: String,
    pub subject: String,
    /// May be empty
    #[serde(default)]
    pub body: String,
}

/// Email analysis response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub label: String,
    pub score: f64,
    pub detailed_predictions: Vec<ScoredLabel>,
    pub message: String,
}

impl AnalyzeResponse {
    fn from_classification(
        request: AnalyzeRequest,
        outcome: Classification,
        message: &str,
    ) -> Self {
        Self {
            sender: request.sender,
            subject: request.subject,
            body: request.body,
            label: outcome.primary_label,
            score: outcome.primary_score,
            detailed_predictions: outcome.detailed,
            message: message.to_string(),
        }
    }

    fn failure(request: AnalyzeRequest, label: &str, message: String) -> Self {
        Self {
            sender: request.sender,
            subject: request.subject,
            body: request.body,
            label: label.to_string(),
            score: 0.0,
            detailed_predictions: Vec::new(),
            message,
        }
    }
}

/// Create the email analysis router
pub fn router(client: Arc<InferenceClient>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze))
        .with_state(client)
}

/// Classify one email through the upstream zero-shot model.
///
/// Upstream failures are absorbed into a 200 response with a sentinel label;
/// the caller never sees a transport-level error for a handled failure.
async fn analyze(
    State(client): State<Arc<InferenceClient>>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let text = format!("{} {}", request.subject, request.body);
    info!(sender = %request.sender, "analyzing email");

    let response = match client.zero_shot(&text, &CANDIDATE_LABELS).await {
        Ok(raw) => AnalyzeResponse::from_classification(
            request,
            rank_predictions(raw),
            "Email analysis complete.",
        ),
        Err(err @ EgressError::Parse(_)) => {
            warn!(error = %err, "zero-shot response had an unexpected shape");
            AnalyzeResponse::from_classification(
                request,
                Classification::parse_error(),
                "Email analysis complete.",
            )
        }
        Err(err) => {
            warn!(error = %err, "zero-shot call failed");
            let message = format!("Failed to analyze email with AI: {}", err.user_message());
            AnalyzeResponse::failure(request, LABEL_API_ERROR, message)
        }
    };

    Json(response)
}

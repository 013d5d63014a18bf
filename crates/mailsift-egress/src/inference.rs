//! Hosted inference API connector

use crate::{
    EgressError, Result,
    client::{HttpClientConfig, create_client},
};
use mailsift_core::{EntityPrediction, RawPrediction};
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

/// Inference connector configuration
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Bearer token for authentication
    pub api_token: String,

    /// Base URL for the hosted inference API
    /// (default: https://api-inference.huggingface.co/models)
    pub base_url: String,

    /// Model id used for zero-shot email classification
    pub zero_shot_model: String,

    /// Model id used for PII entity recognition
    pub ner_model: String,

    /// HTTP client configuration
    pub client_config: HttpClientConfig,
}

impl InferenceConfig {
    /// Create a new configuration with the default hosted endpoint and models
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: "https://api-inference.huggingface.co/models".to_string(),
            zero_shot_model: "facebook/bart-large-mnli".to_string(),
            ner_model: "urchade/gliner_multi_pii-v1".to_string(),
            client_config: HttpClientConfig::default(),
        }
    }

    /// Set the base URL (for custom or mock endpoints)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the zero-shot classification model id
    pub fn with_zero_shot_model(mut self, model: impl Into<String>) -> Self {
        self.zero_shot_model = model.into();
        self
    }

    /// Set the entity-recognition model id
    pub fn with_ner_model(mut self, model: impl Into<String>) -> Self {
        self.ner_model = model.into();
        self
    }
}

/// Request body for both inference operations
#[derive(Debug, Serialize)]
struct InferenceRequest<'a, P: Serialize> {
    inputs: &'a str,
    parameters: P,
}

/// Parameters for zero-shot classification
#[derive(Debug, Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [&'a str],
    multi_label: bool,
}

/// Parameters for entity recognition
#[derive(Debug, Serialize)]
struct EntityParameters<'a> {
    labels: &'a [&'a str],
}

/// Wire shape of a zero-shot classification response
#[derive(Debug, Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
    scores: Vec<f64>,
}

/// Connector to the hosted inference API
pub struct InferenceClient {
    config: InferenceConfig,
    client: Client,
}

impl InferenceClient {
    /// Create a new inference connector
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let client = create_client(&config.client_config)?;
        Ok(Self { config, client })
    }

    /// Whether a bearer token is configured.
    pub fn has_credentials(&self) -> bool {
        !self.config.api_token.is_empty()
    }

    /// Classify text against the given candidate labels.
    ///
    /// Returns one raw prediction per candidate label, in upstream order.
    /// A 2xx response whose labels and scores arrays disagree in length is a
    /// parse failure.
    #[instrument(skip(self, inputs))]
    pub async fn zero_shot(
        &self,
        inputs: &str,
        candidate_labels: &[&str],
    ) -> Result<Vec<RawPrediction>> {
        let body = InferenceRequest {
            inputs,
            parameters: ZeroShotParameters {
                candidate_labels,
                multi_label: true,
            },
        };

        let response: ZeroShotResponse =
            self.post_json(&self.config.zero_shot_model, &body).await?;

        if response.labels.len() != response.scores.len() {
            return Err(EgressError::Parse(format!(
                "labels/scores length mismatch: {} labels, {} scores",
                response.labels.len(),
                response.scores.len()
            )));
        }

        Ok(response
            .labels
            .into_iter()
            .zip(response.scores)
            .map(|(label, score)| RawPrediction { label, score })
            .collect())
    }

    /// Recognize entities of the given types in the input text.
    #[instrument(skip(self, inputs))]
    pub async fn extract_entities(
        &self,
        inputs: &str,
        labels: &[&str],
    ) -> Result<Vec<EntityPrediction>> {
        let body = InferenceRequest {
            inputs,
            parameters: EntityParameters { labels },
        };

        self.post_json(&self.config.ner_model, &body).await
    }

    /// POST a JSON body to one of the configured models and deserialize the
    /// 2xx response. Non-2xx responses surface their status and body.
    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, model: &str, body: &B) -> Result<T> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), model);
        debug!(%url, "calling inference endpoint");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(EgressError::Upstream {
                status_code: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| EgressError::Parse(format!("invalid response from {model}: {e}")))
    }
}

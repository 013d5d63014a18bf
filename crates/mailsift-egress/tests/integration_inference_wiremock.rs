//! Integration tests for the inference connector using wiremock
//!
//! These tests mock the hosted inference API to verify the connector's HTTP
//! behavior and error translation.

use mailsift_egress::{EgressError, InferenceClient, InferenceConfig};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

fn connector(mock_server: &MockServer) -> InferenceClient {
    let config = InferenceConfig::new("test-token").with_base_url(mock_server.uri());
    InferenceClient::new(config).unwrap()
}

#[tokio::test]
async fn test_zero_shot_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/facebook/bart-large-mnli"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "inputs": "Win a free prize now",
            "parameters": {"multi_label": true}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sequence": "Win a free prize now",
            "labels": ["spam email", "phishing attempt", "newsletter"],
            "scores": [0.91, 0.55, 0.12]
        })))
        .mount(&mock_server)
        .await;

    let client = connector(&mock_server);
    let predictions = client
        .zero_shot(
            "Win a free prize now",
            &["spam email", "phishing attempt", "newsletter"],
        )
        .await
        .unwrap();

    assert_eq!(predictions.len(), 3);
    assert_eq!(predictions[0].label, "spam email");
    assert_eq!(predictions[0].score, 0.91);
    assert_eq!(predictions[2].label, "newsletter");
}

#[tokio::test]
async fn test_zero_shot_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/facebook/bart-large-mnli"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = connector(&mock_server);
    let err = client.zero_shot("text", &["spam email"]).await.unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert!(err.user_message().contains("authentication failed"));
}

#[tokio::test]
async fn test_zero_shot_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/facebook/bart-large-mnli"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&mock_server)
        .await;

    let client = connector(&mock_server);
    let err = client.zero_shot("text", &["spam email"]).await.unwrap_err();

    assert_eq!(err.status_code(), Some(429));
    assert!(err.user_message().contains("rate limit"));
}

#[tokio::test]
async fn test_zero_shot_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/facebook/bart-large-mnli"))
        .respond_with(
            ResponseTemplate::new(503).set_body_string("Model facebook/bart-large-mnli is loading"),
        )
        .mount(&mock_server)
        .await;

    let client = connector(&mock_server);
    let err = client.zero_shot("text", &["spam email"]).await.unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert!(err.user_message().contains("temporarily unavailable"));
    assert!(err.user_message().contains("is loading"));
}

#[tokio::test]
async fn test_zero_shot_invalid_shape_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/facebook/bart-large-mnli"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": "unexpected payload"
        })))
        .mount(&mock_server)
        .await;

    let client = connector(&mock_server);
    let err = client.zero_shot("text", &["spam email"]).await.unwrap_err();

    assert!(matches!(err, EgressError::Parse(_)));
}

#[tokio::test]
async fn test_zero_shot_length_mismatch_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/facebook/bart-large-mnli"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "labels": ["spam email", "newsletter"],
            "scores": [0.9]
        })))
        .mount(&mock_server)
        .await;

    let client = connector(&mock_server);
    let err = client.zero_shot("text", &["spam email"]).await.unwrap_err();

    match err {
        EgressError::Parse(msg) => assert!(msg.contains("length mismatch")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_extract_entities_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/urchade/gliner_multi_pii-v1"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_partial_json(serde_json::json!({
            "inputs": "mail to admin@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "entity_group": "EMAIL_ADDRESS",
                "score": 0.97,
                "word": "admin@example.com",
                "start": 8,
                "end": 25
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = connector(&mock_server);
    let entities = client
        .extract_entities("mail to admin@example.com", &["EMAIL_ADDRESS"])
        .await
        .unwrap();

    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].entity_group, "EMAIL_ADDRESS");
    assert_eq!(entities[0].word, "admin@example.com");
    assert_eq!(entities[0].score, 0.97);
    assert_eq!(entities[0].start, 8);
    assert_eq!(entities[0].end, 25);
}

#[tokio::test]
async fn test_extract_entities_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/urchade/gliner_multi_pii-v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = connector(&mock_server);
    let entities = client
        .extract_entities("example.com", &["EMAIL_ADDRESS"])
        .await
        .unwrap();

    assert!(entities.is_empty());
}

#[tokio::test]
async fn test_custom_model_ids_are_used_in_the_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/acme/custom-classifier"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "labels": ["spam email"],
            "scores": [0.5]
        })))
        .mount(&mock_server)
        .await;

    let config = InferenceConfig::new("test-token")
        .with_base_url(mock_server.uri())
        .with_zero_shot_model("acme/custom-classifier");
    let client = InferenceClient::new(config).unwrap();

    let predictions = client.zero_shot("text", &["spam email"]).await.unwrap();
    assert_eq!(predictions.len(), 1);
}

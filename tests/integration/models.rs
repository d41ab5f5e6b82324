use crate::common::*;
use openai_client_core::errors::TransportError;
use openai_client_core::prelude::*;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_list_models_sends_auth_headers() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .and(header("Authorization", "Bearer sk-integration"))
        .and(header("OpenAI-Organization", "org-integration"))
        .and(header_exists("user-agent"))
        .respond_with(success_response(model_list()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .models()
        .list(
            &auth().with_organization("org-integration"),
            &RequestOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[1].id, "whisper-1");
}

#[tokio::test]
async fn test_url_override_targets_override_base() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/models/gpt-4"))
        .respond_with(success_response(json!({
            "id": "gpt-4",
            "object": "model",
            "created": 1687882411,
            "owned_by": "openai"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = default_client();
    let options = RequestOptions::new().with_url_override(format!("{}/", mock_server.uri()));
    let response = client
        .models()
        .retrieve("gpt-4", &auth(), &options)
        .await
        .unwrap();

    assert_eq!(response.model.id, "gpt-4");
    assert_eq!(client.config().base_url.as_str(), "https://api.openai.com/");
}

#[tokio::test]
async fn test_invalid_api_key_maps_to_status_error() {
    let mock_server = setup_mock_server().await;
    let body = json!({
        "error": {
            "message": "Incorrect API key provided: sk-integ***",
            "type": "invalid_request_error",
            "param": null,
            "code": "invalid_api_key"
        }
    });

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(error_response(401, body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .models()
        .list(&auth(), &RequestOptions::default())
        .await
        .unwrap_err();

    match &error {
        OpenAIError::Status {
            status_code,
            message,
            error_code,
            raw_content,
            ..
        } => {
            assert_eq!(*status_code, 401);
            assert!(message.starts_with("Incorrect API key"));
            assert_eq!(error_code.as_deref(), Some("invalid_api_key"));
            assert_eq!(serde_json::from_str::<serde_json::Value>(raw_content).unwrap(), body);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(ResponseErrorKind::classify(&error), ResponseErrorKind::InvalidApiKey);
    assert!(!error.is_retryable());
}

#[tokio::test]
async fn test_rate_limit_captures_retry_after() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "7")
                .set_body_json(json!({"error": {"message": "Rate limit reached", "type": "requests"}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .models()
        .list(&auth(), &RequestOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        OpenAIError::Status { status_code: 429, retry_after_secs: Some(7), .. }
    ));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .models()
        .list(&auth(), &RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(503));
    assert_eq!(error.raw_content(), Some("upstream unavailable"));
}

#[tokio::test]
async fn test_per_call_timeout() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(success_response(model_list()).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let options = RequestOptions::new().with_timeout(Duration::from_millis(100));
    let error = client.models().list(&auth(), &options).await.unwrap_err();

    assert!(matches!(error, OpenAIError::Transport(TransportError::Timeout(_))));
}

#[tokio::test]
async fn test_unparsable_body_is_a_decode_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .models()
        .list(&auth(), &RequestOptions::default())
        .await
        .unwrap_err();

    match error {
        OpenAIError::Decode { raw_content, .. } => assert_eq!(raw_content, "<html>gateway</html>"),
        other => panic!("unexpected error: {other:?}"),
    }
}

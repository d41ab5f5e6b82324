use crate::common::*;
use openai_client_core::prelude::*;
use openai_client_core::services::models::ListModelsResponse;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use wiremock::matchers::{method, path};
use wiremock::Mock;

fn list_models(client: Arc<dyn OpenAIClient>) -> AsyncCall<ListModelsResponse> {
    AsyncCall::new(move |options: RequestOptions| async move {
        client.models().list(&auth(), &options).await
    })
}

#[tokio::test]
async fn test_call_override_targets_mock_server() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(success_response(model_list()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = list_models(default_client())
        .with_url_override(mock_server.uri())
        .activate()
        .await
        .unwrap();

    assert_eq!(response.data.len(), 2);
}

#[tokio::test]
async fn test_call_fails_with_raw_body() {
    let mock_server = setup_mock_server().await;
    let body = json!({
        "error": {
            "message": "The model `gpt-7` does not exist",
            "type": "invalid_request_error",
            "param": null,
            "code": "model_not_found"
        }
    });

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(error_response(404, body.clone()))
        .mount(&mock_server)
        .await;

    let mut handle = list_models(client_for(&mock_server)).activate();
    let error = (&mut handle).await.unwrap_err();

    assert!(error.was_error);
    assert_eq!(error.kind, ResponseErrorKind::ModelNotFound);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&error.raw_content).unwrap(),
        body
    );
    assert_eq!(handle.state(), CallState::Failed);
}

#[tokio::test]
async fn test_callback_fires_once_for_network_error() {
    // Nothing listens on port 1.
    let uri = "http://127.0.0.1:1".to_string();

    let (tx, rx) = oneshot::channel();
    let error_tx = Arc::new(std::sync::Mutex::new(Some(tx)));
    let success_tx = error_tx.clone();

    let _guard = list_models(default_client())
        .with_url_override(uri)
        .activate_with(
            move |_: ListModelsResponse| {
                if let Some(tx) = success_tx.lock().unwrap().take() {
                    let _ = tx.send(Err(()));
                }
            },
            move |error: ErrorResult| {
                if let Some(tx) = error_tx.lock().unwrap().take() {
                    let _ = tx.send(Ok(error));
                }
            },
        );

    let error = rx.await.unwrap().expect("on_error fired");
    assert_eq!(error.kind, ResponseErrorKind::NetworkError);
}

#[tokio::test]
async fn test_cancel_aborts_slow_request() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(success_response(model_list()).set_delay(Duration::from_secs(30)))
        .mount(&mock_server)
        .await;

    let mut handle = list_models(client_for(&mock_server)).activate();
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.cancel();

    let error = tokio::time::timeout(Duration::from_secs(5), &mut handle)
        .await
        .expect("cancellation ends the call promptly")
        .unwrap_err();

    assert!(matches!(error.error, OpenAIError::Cancelled));
    assert_eq!(handle.state(), CallState::Cancelled);
}

use crate::common::*;
use openai_client_core::errors::ValidationError;
use openai_client_core::prelude::*;
use openai_client_core::services::fine_tuning::{FineTuningQueryParameters, FineTuningService};
use openai_client_core::services::fine_tunes::{FineTuneService, Hyperparams};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::Mock;

#[tokio::test]
async fn test_legacy_fine_tune_decodes_with_defaults() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/fine-tunes/ft-1"))
        .respond_with(success_response(json!({
            "id": "ft-1",
            "object": "fine-tune",
            "status": "succeeded"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .fine_tunes()
        .retrieve("ft-1", &auth(), &RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(response.base.id, "ft-1");
    assert_eq!(response.base.status, "succeeded");
    assert_eq!(response.base.hyperparams, Hyperparams::default());
    assert!(response.base.result_files.is_empty());
    assert!(response.events.is_empty());
}

#[tokio::test]
async fn test_list_jobs_omits_empty_cursor() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/fine_tuning/jobs"))
        .and(query_param("limit", "20"))
        .and(query_param_is_missing("after"))
        .respond_with(success_response(json!({
            "object": "list",
            "data": [{
                "id": "ftjob-1",
                "object": "fine_tuning.job",
                "model": "gpt-3.5-turbo-0613",
                "status": "running",
                "hyperparameters": {"n_epochs": 3}
            }],
            "has_more": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .fine_tuning()
        .list(
            &FineTuningQueryParameters::default(),
            &auth(),
            &RequestOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, "ftjob-1");
    assert!(!page.has_more);
}

#[tokio::test]
async fn test_list_jobs_with_cursor() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/fine_tuning/jobs"))
        .and(query_param("after", "ftjob-1"))
        .and(query_param("limit", "2"))
        .respond_with(success_response(json!({"object": "list", "data": [], "has_more": false})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = FineTuningQueryParameters::new()
        .with_after("ftjob-1")
        .with_limit(2);
    let page = client
        .fine_tuning()
        .list(&params, &auth(), &RequestOptions::default())
        .await
        .unwrap();

    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_list_jobs_rejects_limit_before_sending() {
    let mock_server = setup_mock_server().await;
    let client = client_for(&mock_server);

    let error = client
        .fine_tuning()
        .list(
            &FineTuningQueryParameters::new().with_limit(0),
            &auth(),
            &RequestOptions::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        OpenAIError::Validation(ValidationError::ValueOutOfRange { .. })
    ));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

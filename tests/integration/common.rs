use openai_client_core::prelude::*;
use std::sync::Arc;
use url::Url;
use wiremock::{MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "sk-integration";

pub async fn setup_mock_server() -> MockServer {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("openai_client_core=debug")
        .with_test_writer()
        .try_init();
    MockServer::start().await
}

/// Client whose configured base URL is the mock server.
pub fn client_for(server: &MockServer) -> Arc<dyn OpenAIClient> {
    let config = OpenAIConfig::new().with_base_url(Url::parse(&server.uri()).unwrap());
    OpenAIClientBuilder::new()
        .with_config(config)
        .build()
        .expect("client builds")
}

/// Client left on the public default base URL; tests reach the mock server through overrides.
pub fn default_client() -> Arc<dyn OpenAIClient> {
    OpenAIClientBuilder::new().build().expect("client builds")
}

pub fn auth() -> Auth {
    Auth::new(TEST_API_KEY)
}

pub fn success_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

pub fn error_response(status: u16, body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

pub fn model_list() -> serde_json::Value {
    serde_json::json!({
        "object": "list",
        "data": [
            {"id": "gpt-4", "object": "model", "created": 1687882411, "owned_by": "openai"},
            {"id": "whisper-1", "object": "model", "created": 1677532384, "owned_by": "openai-internal"}
        ]
    })
}

//! Derived response shapes embed their base shape, so every key of the base encoding must
//! appear in the derived encoding.

use openai_client_core::services::chat::{
    ChatCompletionResponse, ChatCompletionResponseBase, ChatCompletionStreamResponse,
};
use openai_client_core::services::completions::{
    BaseChoice, Choice, CompletionResponse, CompletionResponseBase, CompletionStreamResponse,
};
use openai_client_core::services::files::{OpenAIFile, RetrieveFileResponse, UploadFileResponse};
use openai_client_core::services::fine_tunes::{BaseFineTuneResponse, FineTuneResponse};
use openai_client_core::services::images::{
    ImageEditResponse, ImageResponse, ImageVariationResponse,
};
use openai_client_core::services::models::{OpenAIModel, RetrieveModelResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use test_case::test_case;

fn keys<T: Serialize + Default>() -> Map<String, Value> {
    match serde_json::to_value(T::default()).unwrap() {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn assert_embeds<B, D>()
where
    B: Serialize + DeserializeOwned + Default,
    D: Serialize + DeserializeOwned + Default,
{
    let base = keys::<B>();
    let derived = keys::<D>();
    assert!(!base.is_empty());
    for (key, value) in &base {
        assert_eq!(derived.get(key), Some(value), "missing base key `{key}`");
    }

    // The base encoding decodes as the derived shape and re-encodes every base key.
    let decoded: D = serde_json::from_value(Value::Object(base.clone())).unwrap();
    let reencoded = serde_json::to_value(decoded).unwrap();
    for key in base.keys() {
        assert!(reencoded.get(key).is_some(), "lost base key `{key}`");
    }
}

#[test_case(assert_embeds::<OpenAIModel, RetrieveModelResponse> ; "retrieve model")]
#[test_case(assert_embeds::<BaseChoice, Choice> ; "completion choice")]
#[test_case(assert_embeds::<CompletionResponseBase, CompletionResponse> ; "completion")]
#[test_case(assert_embeds::<CompletionResponseBase, CompletionStreamResponse> ; "completion stream")]
#[test_case(assert_embeds::<ChatCompletionResponseBase, ChatCompletionResponse> ; "chat")]
#[test_case(assert_embeds::<ChatCompletionResponseBase, ChatCompletionStreamResponse> ; "chat stream")]
#[test_case(assert_embeds::<ImageResponse, ImageEditResponse> ; "image edit")]
#[test_case(assert_embeds::<ImageResponse, ImageVariationResponse> ; "image variation")]
#[test_case(assert_embeds::<OpenAIFile, UploadFileResponse> ; "upload file")]
#[test_case(assert_embeds::<OpenAIFile, RetrieveFileResponse> ; "retrieve file")]
#[test_case(assert_embeds::<BaseFineTuneResponse, FineTuneResponse> ; "fine tune")]
fn test_derived_shape_embeds_base(check: fn()) {
    check();
}

#[test]
fn test_fine_tune_base_fields_decode_through_flatten() {
    let response: FineTuneResponse = serde_json::from_value(serde_json::json!({
        "id": "ft-1",
        "object": "fine-tune",
        "status": "succeeded",
        "hyperparams": {"n_epochs": 4},
        "events": [{"object": "fine-tune-event", "level": "info", "message": "done"}]
    }))
    .unwrap();

    assert_eq!(response.base.id, "ft-1");
    assert_eq!(response.base.hyperparams.n_epochs, 4);
    assert_eq!(response.events.len(), 1);
}

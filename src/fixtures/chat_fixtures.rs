//! Chat completion fixtures

use serde_json::json;

fn chat_envelope(id: &str, choices: serde_json::Value, completion_tokens: u32) -> serde_json::Value {
    json!({
        "id": id,
        "object": "chat.completion",
        "created": 1686676106,
        "model": "gpt-3.5-turbo-0613",
        "choices": choices,
        "usage": {
            "prompt_tokens": 13,
            "completion_tokens": completion_tokens,
            "total_tokens": 13 + completion_tokens
        }
    })
}

/// Single assistant reply that ended on a stop sequence
pub fn chat_completion_response() -> serde_json::Value {
    chat_envelope(
        "chatcmpl-7R4ZqK2eJ6G0hWXQ",
        json!([{
            "index": 0,
            "message": {"role": "assistant", "content": "I'm doing well, thanks for asking."},
            "finish_reason": "stop"
        }]),
        9,
    )
}

/// Two choices (`n = 2`), the second cut off by `max_tokens`
pub fn chat_completion_response_with_multiple_choices() -> serde_json::Value {
    chat_envelope(
        "chatcmpl-7R4ZrM8vL1b3nTqA",
        json!([
            {
                "index": 0,
                "message": {"role": "assistant", "content": "Doing great."},
                "finish_reason": "stop"
            },
            {
                "index": 1,
                "message": {"role": "assistant", "content": "Pretty good, although"},
                "finish_reason": "length"
            }
        ]),
        8,
    )
}

/// Assistant asks for a function call instead of answering; `content` is null
pub fn chat_completion_response_with_function_call() -> serde_json::Value {
    chat_envelope(
        "chatcmpl-7R4ZsP5cX9d2kUyB",
        json!([{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "function_call": {
                    "name": "get_current_weather",
                    "arguments": "{\n  \"location\": \"Boston, MA\"\n}"
                }
            },
            "finish_reason": "function_call"
        }]),
        18,
    )
}

/// One `chat.completion.chunk` event payload
pub fn chat_stream_chunk(content: Option<&str>, finish_reason: Option<&str>) -> serde_json::Value {
    let delta = content
        .map(|content| json!({"role": "assistant", "content": content}))
        .unwrap_or_else(|| json!({}));
    json!({
        "id": "chatcmpl-7R4ZtStream",
        "object": "chat.completion.chunk",
        "created": 1686676107,
        "model": "gpt-3.5-turbo-0613",
        "choices": [{"index": 0, "delta": delta, "finish_reason": finish_reason}]
    })
}

//! File fixtures

use serde_json::json;

/// Sample file object response
pub fn file_object_response() -> serde_json::Value {
    json!({
        "id": "file-abc123",
        "object": "file",
        "bytes": 120000,
        "created_at": 1677610602,
        "filename": "mydata.jsonl",
        "purpose": "fine-tune",
        "status": "processed",
        "status_details": null
    })
}

/// Sample list files response
pub fn list_files_response() -> serde_json::Value {
    json!({
        "object": "list",
        "data": [
            {
                "id": "file-abc123",
                "object": "file",
                "bytes": 120000,
                "created_at": 1677610602,
                "filename": "mydata.jsonl",
                "purpose": "fine-tune"
            },
            {
                "id": "file-def456",
                "object": "file",
                "bytes": 4096,
                "created_at": 1677610700,
                "filename": "results.csv",
                "purpose": "fine-tune-results"
            }
        ]
    })
}

/// Sample delete file response
pub fn delete_file_response() -> serde_json::Value {
    json!({
        "id": "file-abc123",
        "object": "file",
        "deleted": true
    })
}

/// Sample JSONL training file content
pub fn training_file_content() -> &'static str {
    "{\"prompt\": \"Hello\", \"completion\": \" World\"}\n{\"prompt\": \"Foo\", \"completion\": \" Bar\"}\n"
}

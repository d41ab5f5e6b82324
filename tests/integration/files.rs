use crate::common::*;
use bytes::Bytes;
use openai_client_core::prelude::*;
use openai_client_core::services::files::{FilePurpose, FileService, UploadFileRequest};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_upload_sends_multipart_form() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/files"))
        .respond_with(success_response(json!({
            "id": "file-abc123",
            "object": "file",
            "bytes": 24,
            "created_at": 1677610602,
            "filename": "train.jsonl",
            "purpose": "fine-tune"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = UploadFileRequest::new(
        Bytes::from_static(b"{\"prompt\":\"a\",\"completion\":\"b\"}\n"),
        "train.jsonl",
        FilePurpose::FineTune,
    );
    let response = client
        .files()
        .upload(request, &auth(), &RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(response.file.id, "file-abc123");

    let received = mock_server.received_requests().await.unwrap();
    let content_type = received[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    let body = String::from_utf8_lossy(&received[0].body);
    assert!(body.contains("name=\"purpose\""));
    assert!(body.contains("fine-tune"));
    assert!(body.contains("filename=\"train.jsonl\""));
}

#[tokio::test]
async fn test_file_content_is_returned_verbatim() {
    let mock_server = setup_mock_server().await;
    let content = "{\"prompt\":\"a\",\"completion\":\"b\"}\n{\"prompt\":\"c\",\"completion\":\"d\"}\n";

    Mock::given(method("GET"))
        .and(path("/v1/files/file-abc123/content"))
        .respond_with(ResponseTemplate::new(200).set_body_string(content))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .files()
        .content("file-abc123", &auth(), &RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(response.content, content);
}

#[tokio::test]
async fn test_upload_filename_cannot_inject_part_headers() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/files"))
        .respond_with(success_response(json!({"id": "file-xyz", "object": "file"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = UploadFileRequest::new(
        Bytes::from_static(b"{}\n"),
        "evil\".jsonl\r\nContent-Type: text/html",
        FilePurpose::FineTune,
    );
    client
        .files()
        .upload(request, &auth(), &RequestOptions::default())
        .await
        .unwrap();

    let received = mock_server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body);
    assert!(!body.contains("\r\nContent-Type: text/html"));
    assert!(!body.contains("filename=\"evil\""));
    assert!(body.contains("name=\"file\""));
}

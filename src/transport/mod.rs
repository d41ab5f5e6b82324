mod http_transport;
mod multipart;
mod request_builder;
mod response_parser;
mod sse;

pub use http_transport::ReqwestTransport;
pub use multipart::{MultipartForm, MultipartPart};
pub use request_builder::RequestBuilder;
pub use response_parser::ResponseParser;
pub use sse::SseEvent;

use crate::errors::OpenAIResult;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Bytes),
    /// Encoded by the transport, which also owns the boundary and the `Content-Type` header.
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn content_type(&self) -> Option<&str> {
        match self {
            RequestBody::Json(_) => Some("application/json"),
            RequestBody::Empty | RequestBody::Multipart(_) => None,
        }
    }

    /// Raw bytes of a JSON body.
    pub fn bytes(&self) -> Option<&Bytes> {
        match self {
            RequestBody::Json(body) => Some(body),
            RequestBody::Empty | RequestBody::Multipart(_) => None,
        }
    }

    pub fn multipart(&self) -> Option<&MultipartForm> {
        match self {
            RequestBody::Multipart(form) => Some(form),
            _ => None,
        }
    }
}

/// Everything the transport needs for one call. `path` already carries the query string.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: RequestBody,
    pub url_override: Option<String>,
    pub timeout: Option<Duration>,
    pub cancellation: Option<CancellationToken>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends exactly one HTTP request per call and never retries.
///
/// Implementations return `OpenAIError::Status` for non-2xx answers, so an `Ok` response
/// always carries a success status.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> OpenAIResult<HttpResponse>;
}

//! Mock HTTP transport for testing

use crate::errors::{ErrorMapper, OpenAIError, OpenAIResult, TransportError};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, MultipartForm};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock HTTP transport that replays queued responses and records every request
#[derive(Clone)]
pub struct MockHttpTransport {
    inner: Arc<Mutex<MockHttpTransportInner>>,
}

struct MockHttpTransportInner {
    responses: VecDeque<MockResponse>,
    requests: Vec<MockRequest>,
    delay: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct MockRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
    pub multipart: Option<MultipartForm>,
    pub url_override: Option<String>,
}

enum MockResponse {
    Body { status: u16, body: Bytes },
    Error(OpenAIError),
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockHttpTransportInner {
                responses: VecDeque::new(),
                requests: Vec::new(),
                delay: None,
            })),
        }
    }

    /// Add a successful JSON response
    pub fn with_json_response(self, response: serde_json::Value) -> Self {
        self.with_status_response(200, response.to_string())
    }

    /// Add a successful response with a raw body, e.g. an event stream
    pub fn with_body_response(self, body: impl Into<String>) -> Self {
        self.with_status_response(200, body)
    }

    /// Add a response with an arbitrary status. Non-2xx statuses surface as errors the way
    /// the real transport reports them.
    pub fn with_status_response(self, status: u16, body: impl Into<String>) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.responses.push_back(MockResponse::Body {
                status,
                body: Bytes::from(body.into()),
            });
        }
        self
    }

    /// Add an error response
    pub fn with_error_response(self, error: OpenAIError) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.responses.push_back(MockResponse::Error(error));
        }
        self
    }

    /// Delay every response, so cancellation can race the request
    pub fn with_delay(self, delay: Duration) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.delay = Some(delay);
        }
        self
    }

    /// Get the list of requests made
    pub fn requests(&self) -> Vec<MockRequest> {
        let inner = self.inner.lock().unwrap();
        inner.requests.clone()
    }

    pub fn last_request(&self) -> Option<MockRequest> {
        let inner = self.inner.lock().unwrap();
        inner.requests.last().cloned()
    }

    /// Verify that a request was made with the given method and path
    pub fn verify_request(&self, method: Method, path: &str) -> bool {
        let inner = self.inner.lock().unwrap();
        inner
            .requests
            .iter()
            .any(|r| r.method == method && r.path == path)
    }

    /// Verify that a request was made with the given method, path, and body content
    pub fn verify_request_with_body(&self, method: Method, path: &str, body_contains: &str) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.requests.iter().any(|r| {
            r.method == method
                && r.path == path
                && r.body
                    .as_ref()
                    .map(|b| b.contains(body_contains))
                    .unwrap_or(false)
        })
    }

    /// Get the number of requests made
    pub fn request_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.requests.len()
    }

    fn record(&self, request: &HttpRequest) -> (Option<MockResponse>, Option<Duration>) {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(MockRequest {
            method: request.method.clone(),
            path: request.path.clone(),
            headers: request.headers.clone(),
            body: request
                .body
                .bytes()
                .map(|b| String::from_utf8_lossy(b).into_owned()),
            multipart: request.body.multipart().cloned(),
            url_override: request.url_override.clone(),
        });
        (inner.responses.pop_front(), inner.delay)
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> OpenAIResult<HttpResponse> {
        let (response, delay) = self.record(&request);
        let token = request.cancellation.clone().unwrap_or_default();

        if let Some(delay) = delay {
            tokio::select! {
                _ = token.cancelled() => return Err(OpenAIError::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
        }
        if token.is_cancelled() {
            return Err(OpenAIError::Cancelled);
        }

        match response {
            Some(MockResponse::Body { status, body }) if (200..300).contains(&status) => {
                Ok(HttpResponse {
                    status,
                    headers: HeaderMap::new(),
                    body,
                })
            }
            Some(MockResponse::Body { status, body }) => {
                Err(ErrorMapper::from_response(status, &HeaderMap::new(), &body))
            }
            Some(MockResponse::Error(error)) => Err(error),
            None => Err(OpenAIError::Transport(TransportError::RequestFailed(
                "No mock response configured".to_string(),
            ))),
        }
    }
}

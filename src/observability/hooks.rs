use crate::errors::OpenAIError;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: String,
    pub path: String,
    pub url_override: bool,
}

#[derive(Debug, Clone)]
pub struct ResponseContext {
    pub method: String,
    pub path: String,
    pub status_code: u16,
    pub duration: Duration,
}

/// Callbacks around each transport call. Bodies and credentials are never passed in.
#[async_trait]
pub trait RequestHooks: Send + Sync {
    async fn on_request(&self, _ctx: &RequestContext) {}
    async fn on_response(&self, _ctx: &ResponseContext) {}
    async fn on_error(&self, _ctx: &RequestContext, _error: &OpenAIError) {}
}

pub struct NoOpHooks;

#[async_trait]
impl RequestHooks for NoOpHooks {}

pub struct TracingHooks {
    pub log_requests: bool,
    pub log_responses: bool,
    pub log_errors: bool,
}

impl Default for TracingHooks {
    fn default() -> Self {
        Self {
            log_requests: true,
            log_responses: true,
            log_errors: true,
        }
    }
}

#[async_trait]
impl RequestHooks for TracingHooks {
    async fn on_request(&self, ctx: &RequestContext) {
        if self.log_requests {
            tracing::debug!(
                method = %ctx.method,
                path = %ctx.path,
                url_override = ctx.url_override,
                "Starting request"
            );
        }
    }

    async fn on_response(&self, ctx: &ResponseContext) {
        if self.log_responses {
            tracing::debug!(
                method = %ctx.method,
                path = %ctx.path,
                status = ctx.status_code,
                duration_ms = ctx.duration.as_millis() as u64,
                "Request completed"
            );
        }
    }

    async fn on_error(&self, ctx: &RequestContext, error: &OpenAIError) {
        if !self.log_errors {
            return;
        }
        if error.is_cancelled() {
            tracing::debug!(method = %ctx.method, path = %ctx.path, "Request cancelled");
        } else {
            tracing::warn!(
                method = %ctx.method,
                path = %ctx.path,
                status = ?error.status_code(),
                error = %error,
                "Request failed"
            );
        }
    }
}

use crate::client::OpenAIConfig;
use crate::errors::{ConfigurationError, ErrorMapper, OpenAIError, OpenAIResult};
use crate::observability::{RequestContext, RequestHooks, ResponseContext, TracingHooks};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, RequestBody};
use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use http::HeaderValue;
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use tracing::instrument;
use url::Url;

/// HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    hooks: Arc<dyn RequestHooks>,
}

impl ReqwestTransport {
    /// Creates a new ReqwestTransport from configuration
    pub fn new(config: &OpenAIConfig) -> OpenAIResult<Self> {
        config.validate()?;

        let mut client_builder = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.max_connections)
            .user_agent(&config.user_agent);

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url.as_str()).map_err(|e| {
                OpenAIError::Configuration(ConfigurationError::HttpClient(format!(
                    "Invalid proxy: {}",
                    e
                )))
            })?;
            client_builder = client_builder.proxy(proxy);
        }

        let client = client_builder.build().map_err(|e| {
            OpenAIError::Configuration(ConfigurationError::HttpClient(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            hooks: Arc::new(TracingHooks::default()),
        })
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn RequestHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Builds the full URL for a path. A non-blank override replaces the configured base.
    fn build_url(&self, url_override: Option<&str>, path: &str) -> String {
        let base = url_override
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.base_url.as_str());
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    async fn execute(&self, request: HttpRequest) -> OpenAIResult<HttpResponse> {
        let url = self.build_url(request.url_override.as_deref(), &request.path);
        let mut req_builder = self.client.request(request.method, &url);

        let mut headers = request.headers;
        if let Some(content_type) = request.body.content_type() {
            let value = HeaderValue::from_str(content_type).map_err(|e| {
                OpenAIError::Configuration(ConfigurationError::InvalidHeader(e.to_string()))
            })?;
            headers.insert(CONTENT_TYPE, value);
        }
        req_builder = req_builder.headers(headers);

        match request.body {
            RequestBody::Empty => {}
            RequestBody::Json(body) => req_builder = req_builder.body(body),
            RequestBody::Multipart(form) => req_builder = req_builder.multipart(form.into_form()?),
        }

        if let Some(timeout) = request.timeout {
            req_builder = req_builder.timeout(timeout);
        }

        let response = req_builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        if !(200..300).contains(&status) {
            return Err(ErrorMapper::from_response(status, &headers, &body));
        }

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: HttpRequest) -> OpenAIResult<HttpResponse> {
        let ctx = RequestContext {
            method: request.method.to_string(),
            path: request.path.clone(),
            url_override: request.url_override.is_some(),
        };
        let cancellation = request.cancellation.clone();

        self.hooks.on_request(&ctx).await;
        let started = Instant::now();

        let result = match cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(OpenAIError::Cancelled),
                    result = self.execute(request) => result,
                }
            }
            None => self.execute(request).await,
        };

        match &result {
            Ok(response) => {
                self.hooks
                    .on_response(&ResponseContext {
                        method: ctx.method.clone(),
                        path: ctx.path.clone(),
                        status_code: response.status,
                        duration: started.elapsed(),
                    })
                    .await;
            }
            Err(error) => self.hooks.on_error(&ctx, error).await,
        }

        result
    }
}

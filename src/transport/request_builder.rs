use crate::auth::Auth;
use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::transport::{HttpRequest, MultipartForm, RequestBody};
use crate::types::RequestOptions;
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use std::str::FromStr;

pub struct RequestBuilder {
    method: Method,
    path: String,
    headers: HeaderMap,
    query_params: Vec<(String, String)>,
    body: RequestBody,
    options: RequestOptions,
}

impl RequestBuilder {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            query_params: Vec::new(),
            body: RequestBody::Empty,
            options: RequestOptions::default(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> OpenAIResult<Self> {
        let header_name = HeaderName::from_str(name.as_ref()).map_err(|e| {
            OpenAIError::Validation(ValidationError::InvalidParameter {
                parameter: "header_name".to_string(),
                reason: e.to_string(),
            })
        })?;

        let header_value = HeaderValue::from_str(value.as_ref()).map_err(|e| {
            OpenAIError::Validation(ValidationError::InvalidParameter {
                parameter: "header_value".to_string(),
                reason: e.to_string(),
            })
        })?;

        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn auth(mut self, auth: &Auth) -> OpenAIResult<Self> {
        auth.apply(&mut self.headers)?;
        Ok(self)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query_params.push((key.into(), value.to_string()));
        self
    }

    /// Adds the parameter only when a non-empty value is given.
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value.map(|v| v.to_string()).filter(|v| !v.is_empty()) {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> OpenAIResult<Self> {
        let bytes = serde_json::to_vec(body).map_err(|e| {
            OpenAIError::Serialization(format!("Failed to serialize JSON: {}", e))
        })?;
        self.body = RequestBody::Json(Bytes::from(bytes));
        Ok(self)
    }

    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Applies per-call options. Extra headers never replace the auth headers.
    pub fn options(mut self, options: &RequestOptions) -> Self {
        if let Some(extra) = &options.headers {
            for (key, value) in extra.iter() {
                if !self.headers.contains_key(key) {
                    self.headers.insert(key.clone(), value.clone());
                }
            }
        }
        self.options = options.clone();
        self
    }

    pub fn build(self) -> HttpRequest {
        let path = self.build_path();
        let url_override = self.options.effective_url_override().map(str::to_string);
        HttpRequest {
            method: self.method,
            path,
            headers: self.headers,
            body: self.body,
            url_override,
            timeout: self.options.timeout,
            cancellation: self.options.cancellation,
        }
    }

    pub fn build_path(&self) -> String {
        if self.query_params.is_empty() {
            self.path.clone()
        } else {
            let query_string = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query_params.iter())
                .finish();
            format!("{}?{}", self.path, query_string)
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

//! HTTP Interceptor interfaces
//!
//! Interceptors observe outbound requests: they may add headers before send,
//! and are notified of responses and errors. Hooks are best-effort and should
//! avoid expensive work.

use crate::error::TransportError;
use crate::transport::Method;

/// Context passed to interceptors describing the request.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    pub request_id: String,
    pub method: Method,
    pub url: String,
}

impl HttpRequestContext {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            request_id: generate_request_id(),
            method,
            url: url.into(),
        }
    }
}

/// Generate a request id used to correlate interceptor callbacks.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called before sending a request. Return the (possibly modified)
    /// builder or an error to short-circuit the request.
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
        _body: Option<&serde_json::Value>,
    ) -> Result<reqwest::RequestBuilder, TransportError> {
        Ok(builder)
    }

    /// Called after a successful (2xx) response is received.
    fn on_response(&self, _ctx: &HttpRequestContext, _status: u16) {}

    /// Called when the request failed or the response was classified as an error.
    fn on_error(&self, _ctx: &HttpRequestContext, _error: &TransportError) {}
}

/// A simple logging interceptor backed by `tracing` (no bodies are logged).
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

impl HttpInterceptor for LoggingInterceptor {
    fn on_before_send(
        &self,
        ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
        _body: Option<&serde_json::Value>,
    ) -> Result<reqwest::RequestBuilder, TransportError> {
        tracing::debug!(target: "ticketing::http", request_id=%ctx.request_id, method=%ctx.method, url=%ctx.url, "sending request");
        Ok(builder)
    }

    fn on_response(&self, ctx: &HttpRequestContext, status: u16) {
        tracing::debug!(target: "ticketing::http", request_id=%ctx.request_id, method=%ctx.method, url=%ctx.url, status, "response received");
    }

    fn on_error(&self, ctx: &HttpRequestContext, error: &TransportError) {
        tracing::debug!(target: "ticketing::http", request_id=%ctx.request_id, method=%ctx.method, url=%ctx.url, status=?error.status, err=%error, "request error");
    }
}

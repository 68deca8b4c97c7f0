//! `reqwest`-backed transport.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::envelope;
use super::interceptor::{HttpInterceptor, HttpRequestContext};
use super::{HttpTransport, Method};
use crate::config::TransportConfig;
use crate::error::{ServiceError, TransportError};

/// Live HTTP transport. One instance is shared by every executor; it holds no
/// per-request state.
#[derive(Clone)]
pub struct ReqwestTransport {
    config: Arc<TransportConfig>,
    http_client: reqwest::Client,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
}

impl ReqwestTransport {
    pub fn new(config: TransportConfig) -> Result<Self, ServiceError> {
        let http_client = super::build_http_client(&config)?;
        Ok(Self::with_client(config, http_client))
    }

    /// Use a pre-built client (its own timeout settings apply).
    pub fn with_client(config: TransportConfig, http_client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            http_client,
            interceptors: Vec::new(),
        }
    }

    pub fn with_interceptors(mut self, interceptors: Vec<Arc<dyn HttpInterceptor>>) -> Self {
        self.interceptors = interceptors;
        self
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn fail(&self, ctx: &HttpRequestContext, error: TransportError) -> TransportError {
        for it in &self.interceptors {
            it.on_error(ctx, &error);
        }
        error
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, TransportError> {
        let url = self.config.url_for(path);
        let ctx = HttpRequestContext::new(method, url.clone());

        let mut rb = self.http_client.request(method.into(), &url);
        if let Some(body) = body {
            rb = rb.json(body);
        }
        for it in &self.interceptors {
            rb = it
                .on_before_send(&ctx, rb, body)
                .map_err(|e| self.fail(&ctx, e))?;
        }

        let resp = rb
            .send()
            .await
            .map_err(|e| self.fail(&ctx, TransportError::from(e)))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| self.fail(&ctx, TransportError::from(e)))?;

        if !status.is_success() {
            let error = envelope::normalize_error(status.as_u16(), &text, status.canonical_reason());
            return Err(self.fail(&ctx, error));
        }

        for it in &self.interceptors {
            it.on_response(&ctx, status.as_u16());
        }
        Ok(envelope::unwrap_payload(&text))
    }
}

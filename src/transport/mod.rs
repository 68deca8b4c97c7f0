//! HTTP Transport
//!
//! The single point of outbound HTTP communication:
//! - HTTP client construction from `TransportConfig`
//! - Envelope unwrapping and error normalization
//! - Interceptors observing each request
//! - The `HttpTransport` trait and its `reqwest` implementation

pub mod client;
pub mod envelope;
pub mod interceptor;
mod method;
mod reqwest_transport;

pub use client::build_http_client;
pub use interceptor::{HttpInterceptor, HttpRequestContext, LoggingInterceptor};
pub use method::Method;
pub use reqwest_transport::ReqwestTransport;

use crate::error::TransportError;
use async_trait::async_trait;

/// Outbound HTTP seam. Implementations are stateless across calls and safe
/// to share between concurrent executors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one request and return the unwrapped payload.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, TransportError>;
}

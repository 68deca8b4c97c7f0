//! HTTP client construction

use crate::config::TransportConfig;
use crate::error::ServiceError;

/// Build the shared `reqwest::Client` from a `TransportConfig`.
///
/// Invalid header names or values are reported as
/// `ServiceError::Configuration`.
pub fn build_http_client(config: &TransportConfig) -> Result<reqwest::Client, ServiceError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    if !config.headers.is_empty() {
        let mut headers = reqwest::header::HeaderMap::new();
        for (k, v) in &config.headers {
            let name = reqwest::header::HeaderName::from_bytes(k.as_bytes()).map_err(|e| {
                ServiceError::Configuration(format!("Invalid header name '{k}': {e}"))
            })?;
            let value = reqwest::header::HeaderValue::from_str(v).map_err(|e| {
                ServiceError::Configuration(format!("Invalid header value for '{k}': {e}"))
            })?;
            headers.insert(name, value);
        }
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|e| ServiceError::Configuration(format!("Failed to create HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        assert!(build_http_client(&TransportConfig::default()).is_ok());
    }

    #[test]
    fn builds_with_custom_header() {
        let config = TransportConfig::builder()
            .header("X-Client", "web")
            .build();
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn builds_without_any_timeout() {
        let config = TransportConfig::builder()
            .timeout(None)
            .connect_timeout(None)
            .build();
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn rejects_invalid_header_name() {
        let config = TransportConfig::builder()
            .header("Invalid Header Name", "value")
            .build();
        match build_http_client(&config) {
            Err(ServiceError::Configuration(msg)) => assert!(msg.contains("Invalid header name")),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }
}

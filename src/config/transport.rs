//! Transport configuration and its builder.

use std::collections::HashMap;
use std::time::Duration;

/// Settings for the shared HTTP transport. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// API base URL; request paths are appended to it.
    pub base_url: String,
    /// Overall request timeout (connect + response). `None` disables it.
    pub timeout: Option<Duration>,
    /// Connection timeout
    pub connect_timeout: Option<Duration>,
    /// User agent
    pub user_agent: Option<String>,
    /// Headers sent with every request
    pub headers: HashMap<String, String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: crate::defaults::http::BASE_URL.to_string(),
            timeout: Some(crate::defaults::http::REQUEST_TIMEOUT),
            connect_timeout: Some(crate::defaults::http::CONNECT_TIMEOUT),
            user_agent: Some(crate::defaults::http::USER_AGENT.to_string()),
            headers: HashMap::new(),
        }
    }
}

impl TransportConfig {
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::new()
    }

    /// `base_url` joined with `path`, with exactly one `/` between them.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() {
            base.to_string()
        } else if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

/// Builder for `TransportConfig`
///
/// Fields never touched keep their defaults; an explicit `None` clears them.
#[derive(Debug, Clone, Default)]
pub struct TransportConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Option<Duration>>,
    connect_timeout: Option<Option<Duration>>,
    user_agent: Option<Option<String>>,
    headers: HashMap<String, String>,
}

impl TransportConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = Some(timeout);
        self
    }
    /// Timeout in milliseconds; `0` means no timeout.
    pub fn timeout_ms(self, millis: u64) -> Self {
        self.timeout((millis > 0).then(|| Duration::from_millis(millis)))
    }
    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }
    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.user_agent = Some(user_agent.map(|s| s.into()));
        self
    }
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> TransportConfig {
        let defaults = TransportConfig::default();
        TransportConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            headers: self.headers,
        }
    }
}

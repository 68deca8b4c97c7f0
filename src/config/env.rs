//! Environment resolver.
//!
//! Every key is read exactly once, when the `Environment` is built. Nothing
//! here can fail: missing or malformed values fall back to defaults, and the
//! mode falls back to live HTTP.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use super::{ModeFlag, TransportConfig};
use crate::defaults::env as keys;

/// Keys consumed by other subsystems (maps, media storage). Opaque here and
/// passed through unchanged.
#[derive(Debug, Default)]
pub struct AuxiliaryKeys {
    pub maps_api_key: Option<SecretString>,
    pub storage_cloud_name: Option<String>,
    pub storage_upload_preset: Option<SecretString>,
}

impl AuxiliaryKeys {
    pub fn maps_api_key(&self) -> Option<&str> {
        self.maps_api_key.as_ref().map(|s| s.expose_secret())
    }

    pub fn storage_upload_preset(&self) -> Option<&str> {
        self.storage_upload_preset.as_ref().map(|s| s.expose_secret())
    }
}

/// Resolved process configuration.
#[derive(Debug)]
pub struct Environment {
    mode: ModeFlag,
    base_url: String,
    timeout: Option<Duration>,
    auxiliary: AuxiliaryKeys,
}

impl Environment {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary key lookup (tests, embedded config).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode = ModeFlag::from_flag(lookup(keys::USE_MOCK).as_deref());
        let base_url = non_empty(keys::API_BASE_URL)
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| crate::defaults::http::BASE_URL.to_string());
        // 0 disables the timeout.
        let timeout = match non_empty(keys::REQUEST_TIMEOUT_MS)
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            Some(0) => None,
            Some(millis) => Some(Duration::from_millis(millis)),
            None => Some(crate::defaults::http::REQUEST_TIMEOUT),
        };

        let auxiliary = AuxiliaryKeys {
            maps_api_key: non_empty(keys::MAPS_API_KEY).map(SecretString::from),
            storage_cloud_name: non_empty(keys::STORAGE_CLOUD_NAME),
            storage_upload_preset: non_empty(keys::STORAGE_UPLOAD_PRESET).map(SecretString::from),
        };

        tracing::debug!(
            target: "ticketing::config",
            mode = %mode,
            base_url = %base_url,
            timeout_ms = timeout.map_or(0, |t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
            "environment resolved"
        );

        Self {
            mode,
            base_url,
            timeout,
            auxiliary,
        }
    }

    pub fn is_mock_enabled(&self) -> bool {
        self.mode.is_mock()
    }

    pub fn mode(&self) -> ModeFlag {
        self.mode
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn auxiliary(&self) -> &AuxiliaryKeys {
        &self.auxiliary
    }

    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(self.timeout)
            .build()
    }
}

//! Core error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Normalized failure of an outbound HTTP call.
///
/// `status` is `None` when no response was received (timeout, connection
/// refused, DNS). `message` prefers the server-supplied text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", display_status_message(.status, .message))]
pub struct TransportError {
    pub status: Option<u16>,
    pub message: String,
}

impl TransportError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A failure without an HTTP response (timeout, connect error).
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }
}

/// Error returned by every executor and service operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Network or HTTP failure, surfaced verbatim.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A mock producer rejected.
    #[error("mock error: {}", display_status_message(.status, .message))]
    MockProducer {
        status: Option<u16>,
        message: String,
    },

    /// Misconfiguration, e.g. no mock producer while mock mode is active.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Local validation failed before the request was dispatched.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The payload did not match the expected type.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Rejection used by mock producers.
    pub fn mock(status: u16, message: impl Into<String>) -> Self {
        Self::MockProducer {
            status: Some(status),
            message: message.into(),
        }
    }

    /// HTTP status, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status,
            Self::MockProducer { status, .. } => *status,
            Self::InvalidInput(_) => Some(400),
            Self::Configuration(_) | Self::Decode(_) => None,
        }
    }

    /// Human-readable message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Transport(e) => &e.message,
            Self::MockProducer { message, .. } => message,
            Self::Configuration(m) | Self::InvalidInput(m) | Self::Decode(m) => m,
        }
    }

    /// 4xx failures: retrying the same request will not help.
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }

    /// No HTTP response was received at all.
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Transport(TransportError { status: None, .. }))
    }
}

fn display_status_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("[{code}] {message}"),
        None => message.to_string(),
    }
}

//! Dual-Mode Request Executor
//!
//! Routes each [`RequestDescriptor`] either to its mock producer or to the
//! shared [`HttpTransport`]. The executor is a pure router: it never retries,
//! caches, coalesces or translates errors. Every call is at-most-once.

mod descriptor;
pub mod mock;

pub use crate::transport::Method;
pub use descriptor::{MockProducer, RequestDescriptor};

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ModeFlag;
use crate::error::ServiceError;
use crate::transport::HttpTransport;

/// What to do with a descriptor that has no mock producer while the
/// executor is in mock mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingMockPolicy {
    /// Fail with `ServiceError::Configuration` without touching the network.
    #[default]
    Reject,
    /// Issue the real HTTP call anyway (legacy behavior, logged as a warning).
    FallThroughToNetwork,
}

/// Routes requests by the mode captured at construction.
#[derive(Clone)]
pub struct Executor {
    mode: ModeFlag,
    missing_mock: MissingMockPolicy,
    transport: Arc<dyn HttpTransport>,
}

static_assertions::assert_impl_all!(Executor: Send, Sync, Clone);

impl Executor {
    pub fn new(mode: ModeFlag, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            mode,
            missing_mock: MissingMockPolicy::default(),
            transport,
        }
    }

    pub fn with_missing_mock_policy(mut self, policy: MissingMockPolicy) -> Self {
        self.missing_mock = policy;
        self
    }

    pub fn mode(&self) -> ModeFlag {
        self.mode
    }

    pub fn missing_mock_policy(&self) -> MissingMockPolicy {
        self.missing_mock
    }

    /// Execute and deserialize the payload into `T`.
    ///
    /// The mock producer's value is returned as-is; live payloads are
    /// deserialized from the unwrapped response body.
    pub async fn execute<T>(&self, descriptor: RequestDescriptor<T>) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
    {
        let (method, path, body, mock) = descriptor.into_parts();

        if self.mode.is_mock() {
            match (mock, self.missing_mock) {
                (Some(producer), _) => {
                    tracing::trace!(target: "ticketing::executor", method=%method, path=%path, "serving mock");
                    return producer().await;
                }
                (None, MissingMockPolicy::Reject) => {
                    tracing::error!(target: "ticketing::executor", method=%method, path=%path, "mock mode active but no mock producer");
                    return Err(ServiceError::Configuration(format!(
                        "mock mode is active but {method} {path} has no mock producer"
                    )));
                }
                (None, MissingMockPolicy::FallThroughToNetwork) => {
                    tracing::warn!(target: "ticketing::executor", method=%method, path=%path, "no mock producer, falling through to network");
                }
            }
        }

        let payload = self.transport.send(method, &path, body.as_ref()).await?;
        serde_json::from_value(payload).map_err(|e| {
            ServiceError::Decode(format!("{method} {path}: {e}"))
        })
    }

    /// Execute and return the raw JSON payload.
    pub async fn execute_value(
        &self,
        descriptor: RequestDescriptor<serde_json::Value>,
    ) -> Result<serde_json::Value, ServiceError> {
        self.execute(descriptor).await
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("mode", &self.mode)
            .field("missing_mock", &self.missing_mock)
            .finish_non_exhaustive()
    }
}

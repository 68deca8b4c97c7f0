//! Application wiring.
//!
//! `TicketingClient` builds the transport, the executor and every feature
//! service exactly once; consumers borrow the services from it.

use std::sync::Arc;

use crate::config::{Environment, ModeFlag, TransportConfig};
use crate::error::ServiceError;
use crate::executor::mock::MockLatency;
use crate::executor::{Executor, MissingMockPolicy};
use crate::services::{
    AnalyticsService, AuthService, BookingService, ChatbotService, EventService, ServiceContext,
    UserService,
};
use crate::transport::{HttpInterceptor, HttpTransport, ReqwestTransport};

#[derive(Debug, Clone)]
pub struct TicketingClient {
    executor: Executor,
    auth: AuthService,
    users: UserService,
    events: EventService,
    bookings: BookingService,
    analytics: AnalyticsService,
    chatbot: ChatbotService,
}

impl TicketingClient {
    pub fn builder() -> TicketingClientBuilder {
        TicketingClientBuilder::default()
    }

    /// Build from the process environment (see [`Environment`]).
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_environment(&Environment::from_env())
    }

    pub fn from_environment(env: &Environment) -> Result<Self, ServiceError> {
        Self::builder()
            .mode(env.mode())
            .transport_config(env.transport_config())
            .build()
    }

    pub fn mode(&self) -> ModeFlag {
        self.executor.mode()
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }

    pub fn events(&self) -> &EventService {
        &self.events
    }

    pub fn bookings(&self) -> &BookingService {
        &self.bookings
    }

    pub fn analytics(&self) -> &AnalyticsService {
        &self.analytics
    }

    pub fn chatbot(&self) -> &ChatbotService {
        &self.chatbot
    }
}

#[derive(Default)]
pub struct TicketingClientBuilder {
    mode: ModeFlag,
    transport_config: Option<TransportConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
    missing_mock: MissingMockPolicy,
    latency: Option<MockLatency>,
}

impl TicketingClientBuilder {
    pub fn mode(mut self, mode: ModeFlag) -> Self {
        self.mode = mode;
        self
    }

    pub fn transport_config(mut self, config: TransportConfig) -> Self {
        self.transport_config = Some(config);
        self
    }

    /// Replace the `reqwest` transport entirely (interceptors and
    /// `transport_config` are then ignored).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn missing_mock_policy(mut self, policy: MissingMockPolicy) -> Self {
        self.missing_mock = policy;
        self
    }

    pub fn mock_latency(mut self, latency: MockLatency) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn build(self) -> Result<TicketingClient, ServiceError> {
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                ReqwestTransport::new(self.transport_config.unwrap_or_default())?
                    .with_interceptors(self.interceptors),
            ),
        };

        let executor =
            Executor::new(self.mode, transport).with_missing_mock_policy(self.missing_mock);
        let ctx = ServiceContext::new(executor.clone())
            .with_latency(self.latency.unwrap_or_default());

        tracing::info!(
            target: "ticketing::executor",
            mode = %self.mode,
            missing_mock = ?self.missing_mock,
            "ticketing client ready"
        );

        Ok(TicketingClient {
            executor,
            auth: AuthService::new(ctx.clone()),
            users: UserService::new(ctx.clone()),
            events: EventService::new(ctx.clone()),
            bookings: BookingService::new(ctx.clone()),
            analytics: AnalyticsService::new(ctx.clone()),
            chatbot: ChatbotService::new(ctx),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::env as keys;

    #[test]
    fn defaults_to_real_mode_and_reject_policy() {
        let client = TicketingClient::builder().build().unwrap();
        assert_eq!(client.mode(), ModeFlag::Real);
        assert_eq!(
            client.executor().missing_mock_policy(),
            MissingMockPolicy::Reject
        );
    }

    #[tokio::test]
    async fn environment_selects_mock_mode() {
        let env = Environment::from_lookup(|key| (key == keys::USE_MOCK).then(|| "true".to_string()));
        let client = TicketingClient::from_environment(&env).unwrap();
        assert_eq!(client.mode(), ModeFlag::Mock);
    }

    #[test]
    fn invalid_transport_header_fails_build() {
        let err = TicketingClient::builder()
            .transport_config(TransportConfig::builder().header("bad header", "x").build())
            .build()
            .unwrap_err();
        assert!(matches!(err, ServiceError::Configuration(_)));
    }
}

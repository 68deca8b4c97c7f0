//! Mock-mode tests: the full client must never reach the network.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use ticketing_sdk::executor::mock::MockLatency;
use ticketing_sdk::prelude::*;
use ticketing_sdk::services::events::EventQuery;
use ticketing_sdk::transport::HttpTransport;

#[derive(Default)]
struct CountingTransport {
    calls: AtomicUsize,
}

#[async_trait]
impl HttpTransport for CountingTransport {
    async fn send(
        &self,
        _method: Method,
        _path: &str,
        _body: Option<&Value>,
    ) -> Result<Value, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({"from": "network"}))
    }
}

fn mock_client(transport: Arc<CountingTransport>) -> TicketingClient {
    TicketingClient::builder()
        .mode(ModeFlag::Mock)
        .transport(transport)
        .mock_latency(MockLatency::NONE)
        .build()
        .expect("client")
}

#[tokio::test]
async fn every_service_resolves_locally() {
    let transport = Arc::new(CountingTransport::default());
    let client = mock_client(transport.clone());

    let featured = client.events().featured().await.unwrap();
    let page = client.events().list(EventQuery::default()).await.unwrap();
    let detail = client.events().detail(&featured[0].id).await.unwrap();
    let session = client.auth().login("fan@example.com", "pw").await.unwrap();
    let profile = client.users().profile().await.unwrap();
    let bookings = client.bookings().list_mine().await.unwrap();
    let stats = client.analytics().dashboard().await.unwrap();
    let context = client.chatbot().context().await.unwrap();
    client.auth().logout().await.unwrap();

    assert_eq!(detail, featured[0]);
    assert_eq!(page.page, 1);
    assert_eq!(session.user.email, "fan@example.com");
    assert!(!profile.email.is_empty());
    assert_eq!(bookings.len(), 2);
    assert_eq!(stats.active_events, context.stats.active_events);
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn descriptor_without_mock_is_a_configuration_error() {
    let transport = Arc::new(CountingTransport::default());
    let client = mock_client(transport.clone());

    let err = client
        .executor()
        .execute_value(RequestDescriptor::get("/venues"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Configuration(_)), "{err:?}");
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn legacy_fall_through_is_opt_in() {
    let transport = Arc::new(CountingTransport::default());
    let client = TicketingClient::builder()
        .mode(ModeFlag::Mock)
        .transport(transport.clone())
        .missing_mock_policy(MissingMockPolicy::FallThroughToNetwork)
        .build()
        .unwrap();

    let value = client
        .executor()
        .execute_value(RequestDescriptor::get("/venues"))
        .await
        .unwrap();

    assert_eq!(value, json!({"from": "network"}));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn otp_send_takes_at_least_one_second() {
    let client = mock_client(Arc::new(CountingTransport::default()));
    let start = tokio::time::Instant::now();

    let ack = client.auth().send_otp("+15550100").await.unwrap();

    assert_eq!(ack.message, "OTP sent");
    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let transport = Arc::new(CountingTransport::default());
    let client = mock_client(transport.clone());

    let (a, b) = tokio::join!(client.analytics().dashboard(), client.analytics().dashboard());
    assert!(a.is_ok() && b.is_ok());
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}

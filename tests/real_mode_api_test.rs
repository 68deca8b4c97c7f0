//! Live-mode tests against a wiremock server.
//!
//! Each test points a `TicketingClient` at a mock HTTP server and checks the
//! exact request that goes out and how the response comes back.

use serde_json::json;
use ticketing_sdk::config::TransportConfig;
use ticketing_sdk::prelude::*;
use ticketing_sdk::services::bookings::BookingRequest;
use ticketing_sdk::services::events::SearchQuery;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TicketingClient {
    TicketingClient::builder()
        .mode(ModeFlag::Real)
        .transport_config(
            TransportConfig::builder()
                .base_url(format!("{}/api", server.uri()))
                .build(),
        )
        .build()
        .expect("client")
}

fn user_json(email: &str) -> serde_json::Value {
    json!({
        "id": "6f1c1f7e-3f0a-4a8e-9a57-0d2f3c8b9a10",
        "name": "Fan",
        "email": email,
        "role": "customer",
        "createdAt": "2026-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn login_posts_exact_body_to_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "fan@example.com", "password": "hunter2!"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"token": "live-token", "user": user_json("fan@example.com")},
            "status": 200
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client_for(&server)
        .auth()
        .login("fan@example.com", "hunter2!")
        .await
        .expect("login");

    assert_eq!(session.token, "live-token");
    assert_eq!(session.user.email, "fan@example.com");
}

#[tokio::test]
async fn server_error_surfaces_status_and_message_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events/featured"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"status": 500, "message": "x"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).events().featured().await.unwrap_err();

    assert_eq!(err, ServiceError::Transport(TransportError::new(Some(500), "x")));
    assert_eq!(
        err.shape(),
        ErrorShape {
            status: Some(500),
            message: "x".into()
        }
    );
}

#[tokio::test]
async fn search_sends_encoded_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events/search"))
        .and(query_param("q", "jazz & blues"))
        .and(query_param("city", "Lisbon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut query = SearchQuery::new("jazz & blues");
    query.city = Some("Lisbon".into());
    let hits = client_for(&server).events().search(query).await.expect("search");
    assert!(hits.is_empty());
}

#[tokio::test]
async fn booking_conflict_keeps_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/bookings"))
        .and(body_json(json!({"eventId": "evt-1001", "quantity": 2})))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"error": {"message": "Seats no longer available"}})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .bookings()
        .create(BookingRequest {
            event_id: "evt-1001".into(),
            quantity: 2,
        })
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert_eq!(err.message(), "Seats no longer available");
    assert!(err.is_client_error());
}

#[tokio::test]
async fn delete_account_returns_acknowledgement() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "bye"})))
        .mount(&server)
        .await;

    let ack = client_for(&server)
        .users()
        .delete_account()
        .await
        .expect("delete");
    assert_eq!(ack.message, "bye");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = TicketingClient::builder()
        .transport_config(
            TransportConfig::builder()
                .base_url("http://127.0.0.1:9")
                .timeout_ms(500)
                .build(),
        )
        .build()
        .unwrap();

    let err = client.events().categories().await.unwrap_err();
    assert!(err.is_network_error(), "{err:?}");
    assert_eq!(err.shape().status, None);
}

#[tokio::test]
async fn zero_timeout_from_environment_still_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = format!("{}/api", server.uri());
    let env = Environment::from_lookup(|key| match key {
        "TICKETING_API_BASE_URL" => Some(base_url.clone()),
        "TICKETING_REQUEST_TIMEOUT_MS" => Some("0".to_string()),
        _ => None,
    });
    assert_eq!(env.timeout(), None);

    let client = TicketingClient::from_environment(&env).expect("client");
    let categories = client.events().categories().await.expect("categories");
    assert!(categories.is_empty());
}

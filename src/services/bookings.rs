//! Ticket bookings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::query::segment;
use super::{MessageResponse, ServiceContext, fixtures};
use crate::defaults::booking::{MAX_TICKETS, MIN_TICKETS};
use crate::error::ServiceError;
use crate::executor::RequestDescriptor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[validate(length(min = 1, message = "event id is required"))]
    pub event_id: String,
    #[validate(range(min = MIN_TICKETS, max = MAX_TICKETS, message = "quantity must be between 1 and 10"))]
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub event_id: String,
    pub event_title: String,
    pub quantity: u32,
    pub total_cents: u64,
    pub currency: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Price `request` against the mock catalogue.
fn mock_booking(request: &BookingRequest) -> Result<Booking, ServiceError> {
    let event = fixtures::find_event(&request.event_id)
        .ok_or_else(|| ServiceError::mock(404, "Event not found"))?;
    if request.quantity > event.tickets_available {
        return Err(ServiceError::mock(409, "Not enough tickets available"));
    }
    Ok(Booking {
        id: Uuid::new_v4(),
        event_id: event.id,
        event_title: event.title,
        quantity: request.quantity,
        total_cents: event.price_cents * u64::from(request.quantity),
        currency: event.currency,
        status: BookingStatus::Confirmed,
        created_at: Utc::now(),
    })
}

#[derive(Debug, Clone)]
pub struct BookingService {
    ctx: ServiceContext,
}

impl BookingService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn create(&self, request: BookingRequest) -> Result<Booking, ServiceError> {
        request.validate()?;
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::post("/bookings")
            .json(&request)?
            .mock(move || async move {
                latency.wait().await;
                mock_booking(&request)
            });
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn list_mine(&self) -> Result<Vec<Booking>, ServiceError> {
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::get("/bookings").mock(move || async move {
            latency.wait().await;
            [("evt-1001", 2), ("evt-1004", 1)]
                .into_iter()
                .map(|(event_id, quantity)| {
                    mock_booking(&BookingRequest {
                        event_id: event_id.to_string(),
                        quantity,
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        });
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn cancel(&self, booking_id: &str) -> Result<MessageResponse, ServiceError> {
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::delete(format!("/bookings/{}", segment(booking_id)))
            .mock(move || async move {
                latency.wait().await;
                Ok(MessageResponse::new("Booking cancelled"))
            });
        self.ctx.executor.execute(descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::mock_context;

    fn service() -> BookingService {
        BookingService::new(mock_context())
    }

    fn request(event_id: &str, quantity: u32) -> BookingRequest {
        BookingRequest {
            event_id: event_id.into(),
            quantity,
        }
    }

    #[tokio::test]
    async fn total_is_unit_price_times_quantity() {
        let booking = service().create(request("evt-1004", 3)).await.unwrap();
        assert_eq!(booking.total_cents, 7_500);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.event_title, "Stand-up Saturday");
    }

    #[tokio::test]
    async fn quantity_bounds_are_validated_locally() {
        for qty in [0, 11] {
            let err = service().create(request("evt-1004", qty)).await.unwrap_err();
            assert!(matches!(err, ServiceError::InvalidInput(_)), "{qty}: {err:?}");
        }
    }

    #[tokio::test]
    async fn sold_out_and_unknown_events_are_rejected() {
        let sold_out = service().create(request("evt-1005", 1)).await.unwrap_err();
        assert_eq!(sold_out.status(), Some(409));
        let missing = service().create(request("evt-0000", 1)).await.unwrap_err();
        assert_eq!(missing.status(), Some(404));
    }

    #[tokio::test]
    async fn list_and_cancel() {
        let svc = service();
        assert_eq!(svc.list_mine().await.unwrap().len(), 2);
        assert_eq!(svc.cancel("b-1").await.unwrap().message, "Booking cancelled");
    }
}

//! Feature services
//!
//! Each service is a stateless value holding an [`Executor`]. Every operation
//! builds a single [`RequestDescriptor`](crate::executor::RequestDescriptor)
//! carrying both the live route and a mock producer, then delegates.

pub mod analytics;
pub mod auth;
pub mod bookings;
pub mod chatbot;
pub mod events;
mod fixtures;
mod query;
pub mod users;

pub use analytics::AnalyticsService;
pub use auth::AuthService;
pub use bookings::BookingService;
pub use chatbot::ChatbotService;
pub use events::EventService;
pub use users::UserService;

use serde::{Deserialize, Serialize};

use crate::executor::Executor;
use crate::executor::mock::MockLatency;

/// Shared by every service: the executor plus the simulated mock latency.
#[derive(Debug, Clone)]
pub struct ServiceContext {
    pub executor: Executor,
    pub latency: MockLatency,
}

impl ServiceContext {
    pub fn new(executor: Executor) -> Self {
        Self {
            executor,
            latency: MockLatency::default(),
        }
    }

    pub fn with_latency(mut self, latency: MockLatency) -> Self {
        self.latency = latency;
        self
    }
}

/// `{ "message": ... }` acknowledgement returned by command-style endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
}

impl<T: Clone> Page<T> {
    /// Slice `all` into the 1-based `page`.
    pub fn paginate(all: &[T], page: u32, page_size: u32) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let start = ((page - 1) as usize).saturating_mul(page_size as usize);
        let items = all
            .iter()
            .skip(start)
            .take(page_size as usize)
            .cloned()
            .collect();
        Self {
            items,
            total: all.len(),
            page,
            page_size,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_is_one_based_and_clamps() {
        let all: Vec<u32> = (1..=7).collect();
        let p2 = Page::paginate(&all, 2, 3);
        assert_eq!(p2.items, vec![4, 5, 6]);
        assert_eq!(p2.total, 7);
        let p0 = Page::paginate(&all, 0, 0);
        assert_eq!((p0.page, p0.page_size, p0.items), (1, 1, vec![1]));
        assert!(Page::paginate(&all, 9, 3).items.is_empty());
    }
}

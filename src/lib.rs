//! ticketing-sdk
//!
//! Data services for an event ticketing platform. Every operation resolves
//! either from a local mock producer or from the live HTTP API, depending on
//! the [`ModeFlag`] injected when the [`Executor`] is built.
//!
//! ```rust,ignore
//! use ticketing_sdk::prelude::*;
//!
//! let client = TicketingClient::from_env()?;
//! let featured = client.events().featured().await?;
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod executor;
pub mod observability;
pub mod services;
pub mod transport;

pub use client::{TicketingClient, TicketingClientBuilder};
pub use config::{Environment, ModeFlag, TransportConfig};
pub use error::{ErrorShape, ServiceError, TransportError};
pub use executor::{Executor, Method, MissingMockPolicy, MockProducer, RequestDescriptor};

/// Common imports for application code.
pub mod prelude {
    pub use crate::client::TicketingClient;
    pub use crate::config::{Environment, ModeFlag, TransportConfig};
    pub use crate::error::{ErrorShape, ServiceError, TransportError};
    pub use crate::executor::{Executor, Method, MissingMockPolicy, RequestDescriptor};
    pub use crate::services::{
        AnalyticsService, AuthService, BookingService, ChatbotService, EventService, UserService,
    };
}

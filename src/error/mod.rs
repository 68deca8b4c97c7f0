//! Error Handling Module
//!
//! - Core error types (`ServiceError`, `TransportError`)
//! - The caller-facing `{status?, message}` shape (`ErrorShape`)
//! - Conversions from common library error types
//!
//! # Example
//!
//! ```rust,ignore
//! use ticketing_sdk::error::{ServiceError, TransportError};
//!
//! let error = ServiceError::from(TransportError::new(Some(404), "Event not found"));
//! assert_eq!(error.status(), Some(404));
//! assert!(error.is_client_error());
//! ```

mod conversions;
pub mod helpers;
pub mod types;

pub use helpers::*;
pub use types::*;

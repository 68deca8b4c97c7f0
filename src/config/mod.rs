//! Configuration
//!
//! - `Environment`: resolves settings once from the process environment (or an
//!   injected lookup) and exposes them read-only.
//! - `ModeFlag`: mock vs. live data, passed explicitly to the executor.
//! - `TransportConfig`: base URL and timeouts shared by every request.

mod env;
mod mode;
mod transport;

pub use env::{AuxiliaryKeys, Environment};
pub use mode::ModeFlag;
pub use transport::{TransportConfig, TransportConfigBuilder};

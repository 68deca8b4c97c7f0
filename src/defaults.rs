//! Default Configuration Values
//!
//! Defaults used when the environment does not supply a value.

use std::time::Duration;

/// HTTP transport defaults
pub mod http {
    use super::*;

    /// Default request timeout (connect + response).
    pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

    /// Default connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Default base URL of the ticketing API.
    pub const BASE_URL: &str = "http://localhost:8080/api";

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("ticketing-sdk/", env!("CARGO_PKG_VERSION"));
}

/// Environment keys read at startup
pub mod env {
    pub const API_BASE_URL: &str = "TICKETING_API_BASE_URL";
    pub const REQUEST_TIMEOUT_MS: &str = "TICKETING_REQUEST_TIMEOUT_MS";
    pub const USE_MOCK: &str = "TICKETING_USE_MOCK";
    pub const MAPS_API_KEY: &str = "TICKETING_MAPS_API_KEY";
    pub const STORAGE_CLOUD_NAME: &str = "TICKETING_STORAGE_CLOUD_NAME";
    pub const STORAGE_UPLOAD_PRESET: &str = "TICKETING_STORAGE_UPLOAD_PRESET";
}

/// Mock producer defaults
pub mod mock {
    use super::*;

    /// Lower bound of the simulated network latency.
    pub const MIN_LATENCY: Duration = Duration::from_millis(300);

    /// Upper bound of the simulated network latency.
    pub const MAX_LATENCY: Duration = Duration::from_millis(1_000);

    /// Latency of the OTP send mock.
    pub const OTP_SEND_LATENCY: Duration = Duration::from_millis(1_000);

    /// OTP code accepted by the mock verifier.
    pub const OTP_CODE: &str = "123456";
}

/// Booking limits
pub mod booking {
    pub const MIN_TICKETS: u32 = 1;
    pub const MAX_TICKETS: u32 = 10;
}

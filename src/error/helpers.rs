//! Caller-facing error shape.
//!
//! UI code only ever depends on `{status?, message}`; transport failures and
//! mock rejections are indistinguishable at this level.

use super::types::ServiceError;
use serde::{Deserialize, Serialize};

/// The `{status?, message}` contract exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorShape {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub message: String,
}

impl ServiceError {
    pub fn shape(&self) -> ErrorShape {
        ErrorShape {
            status: self.status(),
            message: self.message().to_string(),
        }
    }
}

impl From<&ServiceError> for ErrorShape {
    fn from(err: &ServiceError) -> Self {
        err.shape()
    }
}

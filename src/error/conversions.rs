//! Conversions from common library errors.

use super::types::{ServiceError, TransportError};

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Decode(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = err
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let detail = errors
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .or_else(|| errors.first().map(|e| e.code.to_string()))
                    .unwrap_or_default();
                format!("{field}: {detail}")
            })
            .collect();
        fields.sort();
        ServiceError::InvalidInput(fields.join("; "))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

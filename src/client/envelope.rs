//! Per-endpoint response decoding
//!
//! Some portal endpoints return a bare array or object, others wrap the
//! payload as `{success, data, message?}`. The caller picks the [`Shape`]
//! for each call; the request wrapper never unwraps anything itself.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::request::GENERIC_REJECTION;
use crate::error::ApiError;

/// Response envelope used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The payload is the value itself
    Bare,
    /// The value lives under `data`, next to a boolean `success`
    Enveloped,
}

impl Shape {
    /// Decode a payload into `T`
    pub fn decode<T: DeserializeOwned>(self, payload: Value) -> Result<T, ApiError> {
        let value = match self {
            Shape::Bare => payload,
            Shape::Enveloped => unwrap_envelope(payload)?,
        };

        serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse(format!("Unexpected response format: {}", e)))
    }
}

fn unwrap_envelope(payload: Value) -> Result<Value, ApiError> {
    let Value::Object(mut map) = payload else {
        return Err(ApiError::InvalidResponse(
            "expected a {success, data} envelope".to_string(),
        ));
    };

    match map.get("success") {
        Some(Value::Bool(true)) => {}
        Some(Value::Bool(false)) => {
            let message = map
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(GENERIC_REJECTION)
                .to_string();
            return Err(ApiError::Rejected {
                status: 200,
                message,
            });
        }
        _ => {
            return Err(ApiError::InvalidResponse(
                "missing boolean `success` flag".to_string(),
            ));
        }
    }

    Ok(map.remove("data").unwrap_or(Value::Null))
}

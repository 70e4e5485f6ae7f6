//! Uniform reply envelope for mutating endpoints.
//!
//! The envelope carries the real outcome of an operation: callers inspect
//! `status` / `statusCode` rather than the transport status, which stays 200.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status: ResponseStatus,
    pub response: String,
    pub request_id: Uuid,
    pub status_code: u16,
}

impl ApiResponse {
    /// Successful outcome, logical status 200.
    pub fn success(request_id: Uuid, response: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            response: response.into(),
            request_id,
            status_code: 200,
        }
    }

    pub fn failure(request_id: Uuid, response: impl Into<String>, status_code: u16) -> Self {
        Self {
            status: ResponseStatus::Failure,
            response: response.into(),
            request_id,
            status_code,
        }
    }
}

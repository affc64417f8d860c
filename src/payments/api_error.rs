// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::common::Error;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
/// Broad classification of an API error.
pub enum ApiErrorType {
    /// Upstream connectivity problem reported by the API itself.
    ApiConnectionError,
    /// Internal API problem.
    ApiError,
    /// Invalid or missing API key.
    AuthenticationError,
    /// Card was declined or otherwise unusable.
    CardError,
    /// Idempotency key reused with different parameters.
    IdempotencyError,
    /// Request had invalid parameters.
    InvalidRequestError,
    /// Too many requests.
    RateLimitError,
    #[serde(other)]
    /// Other not yet supported error type.
    Unknown,
}

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
/// Structured error returned by the payments API in the body of a
/// non-success response.
pub struct ApiError {
    #[serde(rename = "type")]
    /// Broad classification of the error.
    pub error_type: ApiErrorType,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Charge the error relates to, if any.
    pub charge: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Machine-readable error code, e.g. "card_declined".
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Bank decline code, for card errors.
    pub decline_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Human-readable message.
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Request parameter the error relates to, if any.
    pub param: Option<String>,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match (&self.message, &self.code) {
            (Some(message), _) => Display::fmt(&message, f),
            (None, Some(code)) => Display::fmt(&code, f),
            _ => Display::fmt(&format!("{:?}", self.error_type), f),
        }
    }
}

/// Wrapper object the API nests error payloads under.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ApiError,
}

/// Maps a non-success response body to an `Error`. A malformed error payload
/// falls back to carrying the raw body as the message.
pub(crate) fn from_response(status: StatusCode, body: &str) -> Error {
    let api_error = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error }) => error,
        Err(_) => ApiError {
            error_type: ApiErrorType::Unknown,
            charge: None,
            code: None,
            decline_code: None,
            message: Some(body.to_string()),
            param: None,
        },
    };
    Error::Api(status, api_error)
}

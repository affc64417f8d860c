// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::payments::ApiError;
use hyper::StatusCode;
use std::fmt::{Display, Formatter};

/// An enum that keeps the crate's failure origins distinguishable.
///
/// # Example
///
/// Error::Transport(format!("{url}: connection refused"))
#[derive(Debug)]
pub enum Error {
    /// Structured error returned by the payments API for a non-success status.
    Api(StatusCode, ApiError),
    /// Success status whose JSON body did not match the expected model.
    /// Indicates an API/client version mismatch, not a recoverable request error.
    InvalidModel(Box<InvalidModel>),
    /// Network or connection failure before a response could be read.
    Transport(String),
    /// Miscellaneous error, e.g. configuration.
    String(String),
}

/// Details of a response that decoded as JSON but not as the expected model.
#[derive(Debug)]
pub struct InvalidModel {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// URL the request was sent to.
    pub url: String,
    /// Form parameters that were sent.
    pub parameters: Vec<(String, String)>,
    /// The JSON that failed to decode.
    pub json: serde_json::Value,
    /// Field-level validation errors reported by the decoder.
    pub errors: Vec<String>,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::Api(status_code, api_error) => {
                Display::fmt(&format!("{status_code}: {api_error}"), f)
            }
            Error::InvalidModel(invalid) => Display::fmt(invalid, f),
            Error::Transport(mesg) => Display::fmt(&format!("transport: {mesg}"), f),
            Error::String(s) => Display::fmt(&s, f),
        }
    }
}

impl Display for InvalidModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        Display::fmt(
            &format!(
                "{}: {} returned JSON that does not match the model: {}",
                self.status,
                self.url,
                self.errors.join("; ")
            ),
            f,
        )
    }
}

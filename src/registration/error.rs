// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use thiserror::Error;

/// Errors raised while talking to the model registration API
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The request never completed (connection refused, DNS, reset, ...)
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("Server error: {status} - {}", .detail.as_deref().unwrap_or("Unknown error"))]
    Server { status: u16, detail: Option<String> },

    /// The form could not be encoded as JSON
    #[error("Failed to encode registration request: {0}")]
    Encode(String),

    /// The configured endpoint is not a usable base URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl From<reqwest::Error> for RegistrationError {
    fn from(err: reqwest::Error) -> Self {
        RegistrationError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for RegistrationError {
    fn from(err: serde_json::Error) -> Self {
        RegistrationError::Encode(err.to_string())
    }
}

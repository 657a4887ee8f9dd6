// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the ProxHogar client.

use thiserror::Error;

/// The error type returned by every fallible ProxHogar operation.
#[derive(Debug, Error)]
pub enum ProxHogarError {
    /// Configuration errors (invalid values, unusable paths, bad header values).
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never produced an HTTP response (DNS, TLS, connection reset).
    #[error("network error: {message}")]
    Network {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend answered with a non-2xx status.
    ///
    /// `message` is the server-supplied message, so `to_string()` yields
    /// exactly what the backend said.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A 2xx response body could not be decoded into the expected shape.
    #[error("decode error: {message}")]
    Decode {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Session store failures (unreadable file, failed write).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Input rejected before any backend call was made.
    #[error("{0}")]
    Validation(String),

    /// A verification step (identity, background, biometric) did not pass.
    #[error("{0}")]
    Verification(String),

    /// Text-completion service failures.
    #[error("completion error: {0}")]
    Completion(String),

    /// The operation needs a logged-in session and there is none.
    #[error("no active session")]
    NotAuthenticated,

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ProxHogarError {
    /// HTTP status of an [`ProxHogarError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProxHogarError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

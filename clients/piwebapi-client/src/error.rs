// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for piwebapi-client

use thiserror::Error;

/// Status reported for arguments rejected before a request is sent
pub const MISSING_PARAMETER_STATUS: u16 = 400;

/// Errors that can occur while building, sending or decoding a request
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required argument was empty; raised before any network activity
    #[error("Missing required parameter '{parameter}' when calling {operation}")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    /// A path template still had an unbound placeholder after substitution
    #[error("Unbound placeholder in path '{path}' for {operation}")]
    UnboundPathParameter {
        operation: &'static str,
        path: String,
    },

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Base path or request URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A configured header name or value is not valid HTTP
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Connection, TLS or timeout failure reported by the HTTP stack
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The caller's cancellation token fired before the call completed
    #[error("{operation} was cancelled")]
    Cancelled { operation: &'static str },

    /// The request body could not be encoded
    #[error("Failed to serialize request body for {operation}: {reason}")]
    Serialize {
        operation: &'static str,
        reason: String,
    },

    /// The response body did not match the operation's result type
    #[error("Failed to deserialize {operation} response (HTTP {status}): {reason}")]
    Deserialize {
        operation: &'static str,
        status: u16,
        reason: String,
    },

    /// Non-2xx response rejected by [`crate::StatusErrorMapper`]
    #[error("Error calling {operation}: HTTP {status}{}", join_errors(.errors))]
    Status {
        operation: &'static str,
        status: u16,
        /// Messages from the service's `Errors` array, if the body had one
        errors: Vec<String>,
        /// Raw response body, lossily decoded
        body: String,
    },

    /// Caller-defined error produced by a custom [`crate::ErrorMapper`]
    #[error("Error calling {operation}: {source}")]
    Mapped {
        operation: &'static str,
        status: u16,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn join_errors(errors: &[String]) -> String {
    if errors.is_empty() {
        String::new()
    } else {
        format!(" - {}", errors.join("; "))
    }
}

impl ApiError {
    /// HTTP status associated with this error, if any
    ///
    /// Local precondition failures report 400 even though nothing was sent.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::MissingParameter { .. } => Some(MISSING_PARAMETER_STATUS),
            Self::Deserialize { status, .. }
            | Self::Status { status, .. }
            | Self::Mapped { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Name of the operation this error was raised for, if known
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::MissingParameter { operation, .. }
            | Self::UnboundPathParameter { operation, .. }
            | Self::Cancelled { operation }
            | Self::Serialize { operation, .. }
            | Self::Deserialize { operation, .. }
            | Self::Status { operation, .. }
            | Self::Mapped { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Whether the error was raised locally without contacting the service
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. }
                | Self::UnboundPathParameter { .. }
                | Self::Configuration(_)
                | Self::InvalidUrl(_)
                | Self::InvalidHeader { .. }
                | Self::Serialize { .. }
        )
    }

    /// Recover the caller-defined error carried by [`ApiError::Mapped`]
    pub fn downcast_mapped<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Mapped { source, .. } => source.downcast_ref::<E>(),
            _ => None,
        }
    }
}

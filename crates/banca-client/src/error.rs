//! # Client Error Types
//!
//! Error types for remote calls and their dispatch.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Client Error Categories                             │
//! │                                                                         │
//! │  (a) Validation    - failed the feasibility gate / form rules;          │
//! │                      NEVER reached the network                          │
//! │  (b) Connection    - transport failure; no response, no store mutation  │
//! │  (c) Server        - the server rejected the request; carries the       │
//! │                      error envelope {message, status, timestamp}        │
//! │      Decode        - 2xx response whose body didn't match the schema    │
//! │      InvalidBaseUrl/ConfigLoad - local setup problems                   │
//! │                                                                         │
//! │  (d) Stale-data races are NOT detected client-side: the server rejects  │
//! │      the write and the rejection arrives as (c).                        │
//! │                                                                         │
//! │  Every category converts to a user-visible message in                   │
//! │  Session::dispatch_error; nothing propagates unhandled.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use banca_core::error::CheckoutError;

/// Result type alias for remote operations.
pub type ClientResult<T> = Result<T, ClientError>;

// =============================================================================
// Server Error Envelope
// =============================================================================

/// The error body the server sends with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Client Error
// =============================================================================

/// Failure of a remote operation or of the local gate in front of it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Checkout blocked by the client-side feasibility gate. Category (a):
    /// the request never left the process.
    #[error("{0}")]
    Infeasible(#[from] CheckoutError),

    /// The server could not be reached (DNS, refused, timeout, TLS).
    #[error("could not connect to the server: {0}")]
    Connection(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Error {status}: {message}")]
    Server {
        status: u16,
        message: String,
        /// Envelope timestamp, when the body carried the standard envelope.
        timestamp: Option<DateTime<Utc>>,
    },

    /// A 2xx response body did not match the expected shape.
    #[error("could not decode server response: {0}")]
    Decode(String),

    /// The configured API base URL is not a valid URL.
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The configuration file could not be read or parsed.
    #[error("failed to load config: {0}")]
    ConfigLoad(String),
}

impl ClientError {
    /// Builds a Server error from a status code and an optional envelope.
    ///
    /// Falls back to the status' canonical reason, then to a generic
    /// message, when the body was not the standard envelope.
    pub fn server(status: reqwest::StatusCode, envelope: Option<ErrorResponse>) -> Self {
        let (message, timestamp) = match envelope {
            Some(body) => (body.message, Some(body.timestamp)),
            None => (
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
                None,
            ),
        };
        ClientError::Server {
            status: status.as_u16(),
            message,
            timestamp,
        }
    }

    /// HTTP status of a server rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Session expired / not authenticated.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Authenticated but not allowed.
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! Error types for Paygrid API operations.
//!
//! This module provides structured error types for the client library,
//! enabling precise error handling per failure class. Business declines
//! (`Rejection`) and structured API errors (`Data`) carry the server's
//! detail so callers can branch on it.

use std::fmt;

use crate::types::ResponseError;

/// Comprehensive error type for Paygrid API operations.
#[derive(Debug)]
pub enum PaygridError {
    /// Transport-level failure reaching the API.
    Connection {
        /// Target endpoint.
        target: String,
        /// Underlying error message.
        reason: String,
    },

    /// Malformed or invalid payload, a validation failure, an error
    /// response from the API, or a UUID mismatch between request and
    /// response.
    Data {
        /// Human-readable description.
        message: String,
        /// The structured error returned by the API, when one exists.
        response_error: Option<ResponseError>,
    },

    /// Signature verification failed on an incoming envelope, or the
    /// signature material itself was unusable.
    Signature(String),

    /// Business-level decline of an operation that defines an explicit
    /// rejection outcome.
    Rejection {
        /// The rejection reason code reported by the API.
        reason: String,
    },

    /// Inbound notification delivery was malformed (e.g. wrong HTTP verb).
    Notification(String),

    /// A notification arrived but no API client is registered to receive it.
    NoNotificationClient(String),

    /// A notification was routed to a client that has no listener for the
    /// resolved event.
    NoNotificationListener(String),

    /// Settings or key material are missing or unusable.
    Configuration(String),

    /// Serialization/deserialization error.
    Serialization(String),
}

impl PaygridError {
    /// Create a connection error from any error type.
    pub fn connection<E: fmt::Display>(target: impl Into<String>, err: E) -> Self {
        Self::Connection {
            target: target.into(),
            reason: err.to_string(),
        }
    }

    /// Create a data error without structured API detail.
    pub fn data(message: impl Into<String>) -> Self {
        Self::Data {
            message: message.into(),
            response_error: None,
        }
    }

    /// Create a data error carrying the structured error from the API.
    pub fn api_error(message: impl Into<String>, response_error: ResponseError) -> Self {
        Self::Data {
            message: message.into(),
            response_error: Some(response_error),
        }
    }

    /// Create a signature error.
    pub fn signature(message: impl Into<String>) -> Self {
        Self::Signature(message.into())
    }

    /// Create a rejection error.
    pub fn rejection(reason: impl Into<String>) -> Self {
        Self::Rejection {
            reason: reason.into(),
        }
    }

    /// The structured error returned by the API, when this error carries one.
    pub fn response_error(&self) -> Option<&ResponseError> {
        match self {
            Self::Data { response_error, .. } => response_error.as_ref(),
            _ => None,
        }
    }

    /// The rejection reason, when this is a business decline.
    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            Self::Rejection { reason } => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for PaygridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection { target, reason } => {
                write!(f, "connection to {} failed: {}", target, reason)
            }
            Self::Data { message, .. } => write!(f, "{}", message),
            Self::Signature(msg) => write!(f, "signature error: {}", msg),
            Self::Rejection { reason } => write!(f, "request rejected: {}", reason),
            Self::Notification(msg) => write!(f, "notification error: {}", msg),
            Self::NoNotificationClient(msg) => write!(f, "{}", msg),
            Self::NoNotificationListener(msg) => write!(f, "{}", msg),
            Self::Configuration(msg) => write!(f, "configuration error: {}", msg),
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PaygridError {}

impl From<serde_json::Error> for PaygridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

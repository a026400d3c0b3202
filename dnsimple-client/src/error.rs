use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attribute-level validation errors returned by the API, keyed by field name.
///
/// ```json
/// { "email": ["can't be blank", "is an invalid email address"] }
/// ```
pub type AttributeErrors = BTreeMap<String, Vec<String>>;

/// Unified error type for every client operation.
///
/// HTTP failures (any status `>= 400`) are reported as [`Api`](Self::Api);
/// the remaining variants cover transport, decoding and configuration
/// problems. Errors are never retried by the client.
///
/// The enum is serializable (tagged by `code`) for structured error reporting.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum DnsimpleError {
    /// The API answered with a 4xx/5xx status.
    #[error("({status})\nReason: {reason}\nHTTP response body: {body}\n")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status (e.g. `"Not Found"`).
        reason: String,
        /// The `message` key of the JSON error body, if any.
        message: Option<String>,
        /// The `errors` key of the JSON error body, if any.
        attribute_errors: Option<AttributeErrors>,
        /// Raw response body.
        body: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// A successful response body could not be decoded.
    #[error("Parse error: {detail}")]
    ParseError {
        /// Error details.
        detail: String,
    },

    /// A request body could not be serialized.
    #[error("Serialization error: {detail}")]
    SerializationError {
        /// Error details.
        detail: String,
    },

    /// Client configuration is missing or invalid (credentials, base URL, config file).
    #[error("Configuration error: {detail}")]
    Config {
        /// Error details.
        detail: String,
    },

    /// Caller input was rejected before any request was sent.
    #[error("Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Parameter name.
        param: String,
        /// Error details.
        detail: String,
    },
}

impl DnsimpleError {
    /// Build an [`Api`](Self::Api) error from a status code and the raw body.
    ///
    /// `message` and `attribute_errors` are extracted when the body is a JSON
    /// object; an empty or non-JSON body leaves both as `None`.
    pub fn from_response(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        let (message, attribute_errors) = extract_error_details(&body);
        Self::Api {
            status,
            reason: reason.into(),
            message,
            attribute_errors,
            body,
        }
    }

    /// HTTP status, for [`Api`](Self::Api) errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Reason phrase, for [`Api`](Self::Api) errors.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Api { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Error message from the API body, for [`Api`](Self::Api) errors.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Field-level validation errors, for [`Api`](Self::Api) errors.
    pub fn attribute_errors(&self) -> Option<&AttributeErrors> {
        match self {
            Self::Api {
                attribute_errors, ..
            } => attribute_errors.as_ref(),
            _ => None,
        }
    }

    /// Alias of [`attribute_errors`](Self::attribute_errors).
    pub fn errors(&self) -> Option<&AttributeErrors> {
        self.attribute_errors()
    }

    /// Raw response body, for [`Api`](Self::Api) errors.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    pub(crate) fn parse(detail: impl ToString) -> Self {
        Self::ParseError {
            detail: detail.to_string(),
        }
    }

    pub(crate) fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

fn extract_error_details(body: &str) -> (Option<String>, Option<AttributeErrors>) {
    if body.trim().is_empty() {
        return (None, None);
    }
    let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) else {
        return (None, None);
    };

    let message = map
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string);
    let attribute_errors = map
        .get("errors")
        .and_then(|v| serde_json::from_value::<AttributeErrors>(v.clone()).ok());

    (message, attribute_errors)
}

/// Convenience type alias for `Result<T, DnsimpleError>`.
pub type Result<T> = std::result::Result<T, DnsimpleError>;

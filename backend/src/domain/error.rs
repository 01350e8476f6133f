//! Transport-agnostic failure payload.
//!
//! Services return [`Error`]; the HTTP adapter picks a status from its
//! [`ErrorCode`] and serialises the rest as the JSON error envelope
//! (`code`, `message`, optional `traceId` and `details`).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Failure category. Serialised in snake_case and stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed input or a failed field check.
    InvalidRequest,
    /// No animal with the requested identifier.
    NotFound,
    /// The write collides with stored state, such as a taken primary key.
    Conflict,
    /// The database could not be reached.
    ServiceUnavailable,
    /// Anything unexpected. Details never leave the process.
    InternalError,
}

impl ErrorCode {
    /// Wire form of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::ServiceUnavailable => "service_unavailable",
            Self::InternalError => "internal_error",
        }
    }

    const fn default_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid request",
            Self::NotFound => "not found",
            Self::Conflict => "conflict",
            Self::ServiceUnavailable => "service unavailable",
            Self::InternalError => "internal error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain failure.
///
/// `message` is never blank. The [`TraceId`] of the request being served is
/// captured when the error is built.
///
/// # Examples
/// ```
/// use dinos::domain::{Error, ErrorCode};
/// use serde_json::json;
///
/// let err = Error::not_found("animal 42 not found").with_details(json!({ "id": "42" }));
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "not_found: animal 42 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<TraceId>,
    details: Option<Value>,
}

/// Reasons a serialised error payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    #[error("error message must not be empty")]
    EmptyMessage,
    #[error("error trace id must be a UUID")]
    InvalidTraceId,
}

impl Error {
    /// Build an error; a blank `message` falls back to a generic one for
    /// `code`.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            code.default_message().to_owned()
        } else {
            message
        };
        Self {
            code,
            message,
            trace_id: TraceId::current(),
            details: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Request the error was raised under, if any.
    #[must_use]
    pub const fn trace_id(&self) -> Option<TraceId> {
        self.trace_id
    }

    #[must_use]
    pub const fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Whether the failure is an [`ErrorCode::InternalError`].
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self.code, ErrorCode::InternalError)
    }

    /// Replace the captured trace identifier.
    #[must_use]
    pub const fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Attach machine-readable context, such as the offending field.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

/// Wire shape of [`Error`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ErrorDto {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorDto {
    fn from(error: Error) -> Self {
        Self {
            code: error.code,
            message: error.message,
            trace_id: error.trace_id.map(|id| id.to_string()),
            details: error.details,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(dto: ErrorDto) -> Result<Self, Self::Error> {
        if dto.message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        let trace_id = dto
            .trace_id
            .map(|raw| raw.parse::<TraceId>())
            .transpose()
            .map_err(|_| ErrorValidationError::InvalidTraceId)?;
        Ok(Self {
            code: dto.code,
            message: dto.message,
            trace_id,
            details: dto.details,
        })
    }
}

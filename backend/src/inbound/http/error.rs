//! Maps domain errors onto HTTP responses.
//!
//! The body is the serialised [`Error`] envelope. Internal errors are logged
//! in full and reach the client as a bare `internal_error` with the trace id
//! kept, so support can find the log line.

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result type returned by HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The error as a client may see it.
fn client_view(error: &Error) -> Error {
    if !error.is_internal() {
        return error.clone();
    }
    let redacted = Error::internal(INTERNAL_MESSAGE);
    match error.trace_id() {
        Some(trace_id) => redacted.with_trace_id(trace_id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = self.trace_id().map(|id| id.to_string());
        if self.is_internal() {
            error!(
                message = self.message(),
                details = ?self.details(),
                trace_id = trace_id.as_deref(),
                "internal error"
            );
        }

        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = trace_id {
            response.insert_header((TRACE_ID_HEADER, id));
        }
        response.json(client_view(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::internal(INTERNAL_MESSAGE)
    }
}

/// `JsonConfig` error handler: undecodable bodies become `invalid_request`
/// with `details.code = "invalid_body"`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting request body");
    let message = match &err {
        JsonPayloadError::ContentType => "content type must be application/json",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "request body is too large"
        }
        _ => "request body must be valid JSON",
    };
    Error::invalid_request(message)
        .with_details(json!({ "code": "invalid_body", "reason": err.to_string() }))
        .into()
}

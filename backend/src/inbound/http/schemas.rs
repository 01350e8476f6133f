//! utoipa mirrors of domain types.
//!
//! The domain does not derive `ToSchema`; these stand-ins register the error
//! envelope under the domain type names so generated clients see
//! `crate.domain.Error` rather than an adapter type.

use utoipa::ToSchema;

/// Failure category of an error response.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed body, unknown field value, or bad identifier (400).
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No animal with that id (404).
    #[schema(rename = "not_found")]
    NotFound,
    /// The id is already taken (409).
    #[schema(rename = "conflict")]
    Conflict,
    /// Database unreachable (503).
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// Unexpected failure; the message is generic (500).
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error response body.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "schema-only mirror of the domain error")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "missing required field: weight")]
    message: String,
    /// Matches the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// For `invalid_request`, a [`FieldDetailsSchema`]; for `conflict` and
    /// `not_found`, the animal `id`.
    details: Option<serde_json::Value>,
}

/// `details` of a field-level `invalid_request`.
#[derive(ToSchema)]
#[schema(as = FieldErrorDetails)]
#[expect(dead_code, reason = "schema-only description of error details")]
pub struct FieldDetailsSchema {
    #[schema(example = "weight")]
    field: String,
    /// One of `missing_field`, `invalid_uuid`, `invalid_value`,
    /// `id_mismatch`, or `invalid_body` for undecodable JSON.
    #[schema(example = "missing_field")]
    code: String,
    /// Rejected raw value, echoed for identifier failures.
    value: Option<String>,
}

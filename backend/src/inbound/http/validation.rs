//! Field checks for animal request bodies and paths.
//!
//! Every failure is an `invalid_request` error whose `details` carry the
//! field name and a [`FieldIssue`] code, plus the rejected raw value when
//! echoing it helps the caller:
//!
//! ```json
//! {"field": "id", "code": "invalid_uuid", "value": "abc"}
//! ```

use serde_json::{Map, Value};

use crate::domain::{AnimalId, AnimalValidationError, Error};

/// What went wrong with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldIssue {
    MissingField,
    InvalidUuid,
    InvalidValue,
    IdMismatch,
}

impl FieldIssue {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidValue => "invalid_value",
            Self::IdMismatch => "id_mismatch",
        }
    }
}

/// Wire name of an animal field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const ID: Self = Self("id");
    pub(crate) const NAME: Self = Self("name");
    pub(crate) const WEIGHT: Self = Self("weight");
    pub(crate) const DIET: Self = Self("diet");

    pub(crate) const fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(
    field: FieldName,
    issue: FieldIssue,
    message: String,
    rejected: Option<&str>,
) -> Error {
    let mut details = Map::new();
    details.insert("field".to_owned(), Value::from(field.as_str()));
    details.insert("code".to_owned(), Value::from(issue.as_str()));
    if let Some(raw) = rejected {
        details.insert("value".to_owned(), Value::from(raw));
    }
    Error::invalid_request(message).with_details(Value::Object(details))
}

/// Unwrap a body field, treating absence and JSON `null` alike.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| {
        field_error(
            field,
            FieldIssue::MissingField,
            format!("missing required field: {}", field.as_str()),
            None,
        )
    })
}

pub(crate) fn parse_animal_id(raw: &str, field: FieldName) -> Result<AnimalId, Error> {
    AnimalId::new(raw).map_err(|_| {
        field_error(
            field,
            FieldIssue::InvalidUuid,
            format!("{} must be a valid UUID", field.as_str()),
            Some(raw),
        )
    })
}

/// A body id that disagrees with the path id.
pub(crate) fn id_mismatch_error(raw: &str) -> Error {
    field_error(
        FieldName::ID,
        FieldIssue::IdMismatch,
        "id must match the request path".to_owned(),
        Some(raw),
    )
}

pub(crate) fn animal_field_error(err: &AnimalValidationError) -> Error {
    let field = match err {
        AnimalValidationError::InvalidId => FieldName::ID,
        AnimalValidationError::EmptyName => FieldName::NAME,
        AnimalValidationError::EmptyDiet => FieldName::DIET,
        AnimalValidationError::NegativeWeight { .. } => FieldName::WEIGHT,
    };
    field_error(field, FieldIssue::InvalidValue, err.to_string(), None)
}

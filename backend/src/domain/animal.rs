//! Animal records and their validated field types.
//!
//! The database enforces primary key uniqueness and not-null columns. The
//! types here add the checks that do not need a round trip: names and diets
//! must carry text, and weights cannot be negative.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by the animal field constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimalValidationError {
    /// The identifier was not a UUID.
    #[error("animal id must be a valid UUID")]
    InvalidId,
    /// The name was empty once trimmed.
    #[error("animal name must not be empty")]
    EmptyName,
    /// The diet was empty once trimmed.
    #[error("animal diet must not be empty")]
    EmptyDiet,
    /// The weight was below zero.
    #[error("animal weight must not be negative (got {value})")]
    NegativeWeight {
        /// Rejected weight.
        value: i32,
    },
}

/// Primary key of an animal record.
///
/// # Examples
/// ```
/// use dinos::domain::AnimalId;
///
/// let id = AnimalId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid uuid");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalId(Uuid);

impl AnimalId {
    /// Parse an identifier from its textual form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, AnimalValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| AnimalValidationError::InvalidId)
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a random v4 identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

macro_rules! non_blank_text {
    ($(#[$meta:meta])* $name:ident, $error:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap the value.
            pub fn new(value: impl Into<String>) -> Result<Self, AnimalValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(AnimalValidationError::$error);
                }
                Ok(Self(value))
            }

            /// Borrow the text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = AnimalValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_blank_text!(
    /// Common name of an animal, e.g. `Tiger`.
    AnimalName,
    EmptyName
);

non_blank_text!(
    /// Feeding classification, e.g. `carnivore`.
    Diet,
    EmptyDiet
);

/// Weight stored as a 32-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Weight(i32);

impl Weight {
    /// Validate a weight value.
    pub const fn new(value: i32) -> Result<Self, AnimalValidationError> {
        if value < 0 {
            return Err(AnimalValidationError::NegativeWeight { value });
        }
        Ok(Self(value))
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Weight {
    type Error = AnimalValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for i32 {
    fn from(value: Weight) -> Self {
        value.0
    }
}

/// The mutable fields of an animal record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalDraft {
    pub name: AnimalName,
    pub weight: Weight,
    pub diet: Diet,
}

impl AnimalDraft {
    /// Validate raw field values into a draft.
    ///
    /// # Examples
    /// ```
    /// use dinos::domain::AnimalDraft;
    ///
    /// let draft = AnimalDraft::try_from_parts("Tiger", 200, "carnivore").expect("valid draft");
    /// assert_eq!(draft.weight.get(), 200);
    /// assert!(AnimalDraft::try_from_parts(" ", 200, "carnivore").is_err());
    /// ```
    pub fn try_from_parts(
        name: impl Into<String>,
        weight: i32,
        diet: impl Into<String>,
    ) -> Result<Self, AnimalValidationError> {
        Ok(Self {
            name: AnimalName::new(name)?,
            weight: Weight::new(weight)?,
            diet: Diet::new(diet)?,
        })
    }
}

/// Insert request for an animal.
///
/// Leaving `id` empty lets the store generate one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnimal {
    pub id: Option<AnimalId>,
    pub draft: AnimalDraft,
}

impl NewAnimal {
    /// Build an insert request with a store-generated identifier.
    #[must_use]
    pub const fn generated(draft: AnimalDraft) -> Self {
        Self { id: None, draft }
    }

    /// Build an insert request with a caller-supplied identifier.
    #[must_use]
    pub const fn with_id(id: AnimalId, draft: AnimalDraft) -> Self {
        Self { id: Some(id), draft }
    }
}

/// A stored animal record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    id: AnimalId,
    name: AnimalName,
    weight: Weight,
    diet: Diet,
}

impl Animal {
    /// Assemble a record from its identifier and validated fields.
    #[must_use]
    pub fn new(id: AnimalId, draft: AnimalDraft) -> Self {
        let AnimalDraft { name, weight, diet } = draft;
        Self {
            id,
            name,
            weight,
            diet,
        }
    }

    /// Rebuild a record read back from storage.
    ///
    /// The table only enforces presence, so rows written outside this service
    /// may hold blank text or a negative weight. They are returned as stored.
    pub(crate) fn from_storage(id: AnimalId, name: String, weight: i32, diet: String) -> Self {
        Self {
            id,
            name: AnimalName(name),
            weight: Weight(weight),
            diet: Diet(diet),
        }
    }

    /// Primary key of the record.
    #[must_use]
    pub const fn id(&self) -> AnimalId {
        self.id
    }

    /// Display name, such as `Tiger`.
    #[must_use]
    pub const fn name(&self) -> &AnimalName {
        &self.name
    }

    /// Weight as an integer.
    #[must_use]
    pub const fn weight(&self) -> Weight {
        self.weight
    }

    /// Diet label, such as `carnivore`.
    #[must_use]
    pub const fn diet(&self) -> &Diet {
        &self.diet
    }

    /// Return a copy of the record with every mutable field replaced.
    #[must_use]
    pub fn with_draft(&self, draft: AnimalDraft) -> Self {
        Self::new(self.id, draft)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", AnimalValidationError::EmptyName)]
    #[case("   ", AnimalValidationError::EmptyName)]
    fn blank_names_are_rejected(#[case] raw: &str, #[case] expected: AnimalValidationError) {
        assert_eq!(AnimalName::new(raw), Err(expected));
    }

    #[rstest]
    fn blank_diet_is_rejected() {
        assert_eq!(Diet::new("\t"), Err(AnimalValidationError::EmptyDiet));
    }

    #[rstest]
    #[case(0)]
    #[case(200)]
    #[case(i32::MAX)]
    fn non_negative_weights_are_accepted(#[case] value: i32) {
        assert_eq!(Weight::new(value).map(Weight::get), Ok(value));
    }

    #[rstest]
    fn negative_weight_reports_value() {
        let err = Weight::new(-3).expect_err("negative weight");
        assert_eq!(err, AnimalValidationError::NegativeWeight { value: -3 });
        assert!(err.to_string().contains("-3"));
    }

    #[rstest]
    fn animal_id_rejects_non_uuid() {
        assert_eq!(AnimalId::new("tiger"), Err(AnimalValidationError::InvalidId));
    }

    #[rstest]
    fn draft_validation_checks_fields_in_order() {
        let err = AnimalDraft::try_from_parts("", -1, "").expect_err("invalid draft");
        assert_eq!(err, AnimalValidationError::EmptyName);
    }

    #[rstest]
    fn with_draft_keeps_identifier() {
        let id = AnimalId::random();
        let tiger = Animal::new(
            id,
            AnimalDraft::try_from_parts("Tiger", 200, "carnivore").expect("valid draft"),
        );
        let updated = tiger.with_draft(
            AnimalDraft::try_from_parts("Tiger", 220, "carnivore").expect("valid draft"),
        );

        assert_eq!(updated.id(), id);
        assert_eq!(updated.weight().get(), 220);
    }

    #[rstest]
    fn stored_records_are_returned_as_is() {
        let id = AnimalId::random();
        let animal = Animal::from_storage(id, String::new(), -5, "x".to_owned());

        assert_eq!(animal.id(), id);
        assert_eq!(animal.name().as_str(), "");
        assert_eq!(animal.weight().get(), -5);
        assert_eq!(animal.diet().as_str(), "x");
    }

    #[rstest]
    fn text_fields_deserialise_through_validation() {
        let ok: Result<AnimalName, _> = serde_json::from_str("\"Tiger\"");
        let blank: Result<AnimalName, _> = serde_json::from_str("\"  \"");
        assert!(ok.is_ok());
        assert!(blank.is_err());
    }
}

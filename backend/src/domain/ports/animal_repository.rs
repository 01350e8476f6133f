//! Port for animal persistence.

use async_trait::async_trait;

use crate::domain::{Animal, AnimalDraft, AnimalId, NewAnimal};

use super::define_port_error;

define_port_error! {
    /// Errors raised by animal repository adapters.
    pub enum AnimalRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "animal repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "animal repository query failed: {message}",
        /// The primary key is already taken.
        DuplicateId { id: AnimalId } =>
            "animal {id} already exists",
        /// A required column received no value.
        MissingValue { column: String } =>
            "animal column {column} must not be null",
    }
}

/// Port for reading and writing animal records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// Insert a record and return it as stored, including a generated id when
    /// none was supplied.
    async fn insert(&self, animal: &NewAnimal) -> Result<Animal, AnimalRepositoryError>;

    /// List every record ordered by name, then id.
    async fn list(&self) -> Result<Vec<Animal>, AnimalRepositoryError>;

    /// Find a record by id.
    async fn find_by_id(&self, id: &AnimalId) -> Result<Option<Animal>, AnimalRepositoryError>;

    /// Replace the mutable fields of a record. `None` when no row matched.
    async fn update(
        &self,
        id: &AnimalId,
        draft: &AnimalDraft,
    ) -> Result<Option<Animal>, AnimalRepositoryError>;

    /// Delete a record. `false` when no row matched.
    async fn delete(&self, id: &AnimalId) -> Result<bool, AnimalRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn duplicate_id_formats_identifier() {
        let id = AnimalId::random();
        let err = AnimalRepositoryError::duplicate_id(id);
        assert_eq!(err.to_string(), format!("animal {id} already exists"));
    }

    #[rstest]
    fn missing_value_names_column() {
        let err = AnimalRepositoryError::missing_value("diet");
        assert_eq!(err.to_string(), "animal column diet must not be null");
    }

    #[rstest]
    fn connection_error_carries_message() {
        let err = AnimalRepositoryError::connection("refused");
        assert!(err.to_string().contains("refused"));
    }
}

//! Animal registry domain service.
//!
//! Implements the animal driving ports on top of any [`AnimalRepository`],
//! translating repository failures into transport-agnostic [`Error`]s.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{AnimalRepository, AnimalRepositoryError, AnimalsCommand, AnimalsQuery};
use crate::domain::{Animal, AnimalDraft, AnimalId, Error, NewAnimal};

fn map_repository_error(error: AnimalRepositoryError) -> Error {
    match error {
        AnimalRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("animal repository unavailable: {message}"))
        }
        AnimalRepositoryError::Query { message } => {
            Error::internal(format!("animal repository error: {message}"))
        }
        AnimalRepositoryError::DuplicateId { id } => {
            Error::conflict(format!("animal {id} already exists"))
                .with_details(json!({ "id": id.to_string() }))
        }
        AnimalRepositoryError::MissingValue { column } => {
            Error::invalid_request(format!("missing required field: {column}"))
                .with_details(json!({ "field": column, "code": "missing_field" }))
        }
    }
}

fn not_found(id: AnimalId) -> Error {
    Error::not_found(format!("animal {id} not found"))
        .with_details(json!({ "id": id.to_string() }))
}

/// Animal service implementing [`AnimalsCommand`] and [`AnimalsQuery`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use dinos::domain::AnimalService;
/// use dinos::outbound::memory::InMemoryAnimalRepository;
///
/// let service = AnimalService::new(Arc::new(InMemoryAnimalRepository::default()));
/// let _shared = service.clone();
/// ```
pub struct AnimalService<R> {
    animals: Arc<R>,
}

impl<R> Clone for AnimalService<R> {
    fn clone(&self) -> Self {
        Self {
            animals: Arc::clone(&self.animals),
        }
    }
}

impl<R> AnimalService<R> {
    /// Create a service over the given repository.
    pub const fn new(animals: Arc<R>) -> Self {
        Self { animals }
    }
}

#[async_trait]
impl<R> AnimalsCommand for AnimalService<R>
where
    R: AnimalRepository,
{
    async fn create(&self, animal: NewAnimal) -> Result<Animal, Error> {
        let created = self
            .animals
            .insert(&animal)
            .await
            .map_err(map_repository_error)?;
        info!(
            animal_id = %created.id(),
            generated_id = animal.id.is_none(),
            "animal created"
        );
        Ok(created)
    }

    async fn update(&self, id: AnimalId, draft: AnimalDraft) -> Result<Animal, Error> {
        self.animals
            .update(&id, &draft)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: AnimalId) -> Result<(), Error> {
        let removed = self
            .animals
            .delete(&id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(not_found(id));
        }
        info!(animal_id = %id, "animal deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> AnimalsQuery for AnimalService<R>
where
    R: AnimalRepository,
{
    async fn list(&self) -> Result<Vec<Animal>, Error> {
        self.animals.list().await.map_err(map_repository_error)
    }

    async fn get(&self, id: AnimalId) -> Result<Animal, Error> {
        self.animals
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
#[path = "animal_service_tests.rs"]
mod tests;

//! Driving port for animal mutations.
//!
//! Inbound adapters call this port to create, replace, and remove animal
//! records without depending on the repository behind it.

use async_trait::async_trait;

use crate::domain::{Animal, AnimalDraft, AnimalId, Error, NewAnimal};

/// Driving port for animal mutations.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use dinos::domain::ports::AnimalsCommand;
/// use dinos::domain::{AnimalDraft, AnimalService, NewAnimal};
/// use dinos::outbound::memory::InMemoryAnimalRepository;
///
/// # async fn example() -> Result<(), dinos::domain::Error> {
/// let animals = AnimalService::new(Arc::new(InMemoryAnimalRepository::default()));
/// let draft = AnimalDraft::try_from_parts("Tiger", 200, "carnivore")
///     .map_err(|err| dinos::domain::Error::invalid_request(err.to_string()))?;
/// let created = animals.create(NewAnimal::generated(draft)).await?;
/// assert_eq!(created.name().as_str(), "Tiger");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimalsCommand: Send + Sync {
    /// Store a new animal and return it with its identifier.
    async fn create(&self, animal: NewAnimal) -> Result<Animal, Error>;

    /// Replace name, weight, and diet of an existing animal.
    async fn update(&self, id: AnimalId, draft: AnimalDraft) -> Result<Animal, Error>;

    /// Remove an animal.
    async fn delete(&self, id: AnimalId) -> Result<(), Error>;
}

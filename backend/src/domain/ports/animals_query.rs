//! Driving port for animal reads.

use async_trait::async_trait;

use crate::domain::{Animal, AnimalId, Error};

/// Driving port for animal reads.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use dinos::domain::AnimalService;
/// use dinos::domain::ports::AnimalsQuery;
/// use dinos::outbound::memory::InMemoryAnimalRepository;
///
/// # async fn example() -> Result<(), dinos::domain::Error> {
/// let animals = AnimalService::new(Arc::new(InMemoryAnimalRepository::default()));
/// assert!(animals.list().await?.is_empty());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimalsQuery: Send + Sync {
    /// List every animal ordered by name.
    async fn list(&self) -> Result<Vec<Animal>, Error>;

    /// Fetch one animal, failing with `not_found` when it does not exist.
    async fn get(&self, id: AnimalId) -> Result<Animal, Error>;
}

//! Process-local animal store.
//!
//! Backs the HTTP API when no database is configured, and stands in for
//! PostgreSQL in handler and service tests. Records live only as long as the
//! process.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{AnimalRepository, AnimalRepositoryError};
use crate::domain::{Animal, AnimalDraft, AnimalId, NewAnimal};

/// In-memory `AnimalRepository` that mimics the canonical table constraints.
///
/// Omitted identifiers are generated, explicit duplicates are rejected, and
/// listings follow the database ordering (name, then id).
///
/// # Examples
///
/// ```rust
/// use dinos::domain::ports::AnimalRepository;
/// use dinos::domain::{AnimalDraft, NewAnimal};
/// use dinos::outbound::memory::InMemoryAnimalRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryAnimalRepository::default();
/// let draft = AnimalDraft::try_from_parts("Tiger", 200, "carnivore").expect("valid draft");
/// let first = repo.insert(&NewAnimal::generated(draft.clone())).await.expect("insert");
/// let second = repo.insert(&NewAnimal::generated(draft)).await.expect("insert");
/// assert_ne!(first.id(), second.id());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryAnimalRepository {
    animals: Mutex<Vec<Animal>>,
    unavailable: AtomicBool,
}

impl InMemoryAnimalRepository {
    /// Seed the repository with existing records.
    #[must_use]
    pub fn with_animals(animals: Vec<Animal>) -> Self {
        Self {
            animals: Mutex::new(animals),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every call fail with a connection error, as if the database
    /// were down.
    #[cfg(any(test, feature = "test-support"))]
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Release);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.rows().len()
    }

    /// Whether the repository holds no records.
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    fn rows(&self) -> MutexGuard<'_, Vec<Animal>> {
        self.animals.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_available(&self) -> Result<(), AnimalRepositoryError> {
        if self.unavailable.load(Ordering::Acquire) {
            return Err(AnimalRepositoryError::connection("database offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn insert(&self, animal: &NewAnimal) -> Result<Animal, AnimalRepositoryError> {
        self.ensure_available()?;
        let mut rows = self.rows();
        let id = match animal.id {
            Some(id) if rows.iter().any(|row| row.id() == id) => {
                return Err(AnimalRepositoryError::duplicate_id(id));
            }
            Some(id) => id,
            None => AnimalId::random(),
        };
        let stored = Animal::new(id, animal.draft.clone());
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Animal>, AnimalRepositoryError> {
        self.ensure_available()?;
        let mut animals = self.rows().clone();
        animals.sort_by(|a, b| {
            a.name()
                .as_str()
                .cmp(b.name().as_str())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(animals)
    }

    async fn find_by_id(&self, id: &AnimalId) -> Result<Option<Animal>, AnimalRepositoryError> {
        self.ensure_available()?;
        Ok(self.rows().iter().find(|row| row.id() == *id).cloned())
    }

    async fn update(
        &self,
        id: &AnimalId,
        draft: &AnimalDraft,
    ) -> Result<Option<Animal>, AnimalRepositoryError> {
        self.ensure_available()?;
        let mut rows = self.rows();
        Ok(rows.iter_mut().find(|row| row.id() == *id).map(|row| {
            *row = row.with_draft(draft.clone());
            row.clone()
        }))
    }

    async fn delete(&self, id: &AnimalId) -> Result<bool, AnimalRepositoryError> {
        self.ensure_available()?;
        let mut rows = self.rows();
        let before = rows.len();
        rows.retain(|row| row.id() != *id);
        Ok(rows.len() < before)
    }
}

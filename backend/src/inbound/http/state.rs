//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::AnimalService;
use crate::domain::ports::{AnimalRepository, AnimalsCommand, AnimalsQuery};
use crate::outbound::memory::InMemoryAnimalRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub animals: Arc<dyn AnimalsCommand>,
    pub animals_query: Arc<dyn AnimalsQuery>,
}

impl HttpState {
    /// Construct state from the animal driving ports.
    pub fn new(animals: Arc<dyn AnimalsCommand>, animals_query: Arc<dyn AnimalsQuery>) -> Self {
        Self {
            animals,
            animals_query,
        }
    }

    /// Serve both ports from one [`AnimalService`] over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use dinos::inbound::http::state::HttpState;
    /// use dinos::outbound::memory::InMemoryAnimalRepository;
    ///
    /// let state = HttpState::over_repository(Arc::new(InMemoryAnimalRepository::default()));
    /// let _clone = state.clone();
    /// ```
    pub fn over_repository<R>(repository: Arc<R>) -> Self
    where
        R: AnimalRepository + 'static,
    {
        let service = Arc::new(AnimalService::new(repository));
        Self::new(service.clone(), service)
    }
}

/// An empty process-local store.
impl Default for HttpState {
    fn default() -> Self {
        Self::over_repository(Arc::new(InMemoryAnimalRepository::default()))
    }
}

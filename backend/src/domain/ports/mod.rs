//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`AnimalRepository`) are implemented by outbound adapters.
//! Driving ports (`AnimalsCommand`, `AnimalsQuery`) are implemented by domain
//! services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod animal_repository;
mod animals_command;
mod animals_query;

#[cfg(test)]
pub use animal_repository::MockAnimalRepository;
pub use animal_repository::{AnimalRepository, AnimalRepositoryError};
#[cfg(test)]
pub use animals_command::MockAnimalsCommand;
pub use animals_command::AnimalsCommand;
#[cfg(test)]
pub use animals_query::MockAnimalsQuery;
pub use animals_query::AnimalsQuery;

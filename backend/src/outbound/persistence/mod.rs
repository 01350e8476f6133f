//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementation of the `AnimalRepository` port backed by
//! PostgreSQL via `diesel-async` with `bb8` pooling, plus the embedded schema
//! baseline.
//!
//! - Repository code only translates between Diesel rows and domain types.
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Database failures are mapped to `AnimalRepositoryError` variants.
//!
//! # Example
//!
//! ```no_run
//! use dinos::outbound::persistence::{DbPool, DieselAnimalRepository, PoolConfig};
//!
//! # async fn example() -> Result<(), dinos::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/animals")).await?;
//! let repo = DieselAnimalRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_animal_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_animal_repository::DieselAnimalRepository;
pub use migrations::{MIGRATIONS, SchemaError, apply_schema};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};

//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed animal repository using Diesel ORM,
//!   plus the embedded schema baseline.
//! - **memory**: process-local repository used when no database is
//!   configured.
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;

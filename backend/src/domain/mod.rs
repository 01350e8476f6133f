//! Domain primitives, services, and ports.
//!
//! Purpose: define the strongly typed animal registry model used by the
//! inbound and outbound adapters. Nothing here depends on Actix, Diesel, or
//! utoipa; adapters translate at the edges.
//!
//! Public surface:
//! - `Animal`, `AnimalDraft`, `NewAnimal` and the validated field types.
//! - `AnimalService`, the driving-port implementation.
//! - `Error` / `ErrorCode`, the transport-agnostic failure payload.
//! - `TraceId`, the task-local request correlation identifier.

pub mod animal;
pub mod animal_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::animal::{
    Animal, AnimalDraft, AnimalId, AnimalName, AnimalValidationError, Diet, NewAnimal, Weight,
};
pub use self::animal_service::AnimalService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::animals;

/// Row struct for reading from the animals table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = animals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AnimalRow {
    pub id: Uuid,
    pub name: String,
    pub weight: i32,
    pub diet: String,
}

/// Insertable struct for creating animal records.
///
/// A `None` id is rendered as `DEFAULT`, so PostgreSQL generates it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = animals)]
pub(crate) struct NewAnimalRow<'a> {
    pub id: Option<Uuid>,
    pub name: &'a str,
    pub weight: i32,
    pub diet: &'a str,
}

/// Changeset replacing every mutable column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = animals)]
pub(crate) struct AnimalUpdate<'a> {
    pub name: &'a str,
    pub weight: i32,
    pub diet: &'a str,
}

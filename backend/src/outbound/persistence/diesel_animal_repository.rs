//! PostgreSQL-backed `AnimalRepository` implementation using Diesel ORM.
//!
//! Primary key and not-null violations reported by PostgreSQL are translated
//! into the port's `DuplicateId` and `MissingValue` errors so the domain can
//! tell them apart from infrastructure failures.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{AnimalRepository, AnimalRepositoryError};
use crate::domain::{Animal, AnimalDraft, AnimalId, NewAnimal};

use super::models::{AnimalRow, AnimalUpdate, NewAnimalRow};
use super::pool::{DbPool, PoolError};
use super::schema::animals;

/// Diesel-backed implementation of the `AnimalRepository` port.
#[derive(Clone)]
pub struct DieselAnimalRepository {
    pool: DbPool,
}

impl DieselAnimalRepository {
    /// Create a new repository with the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to animal repository errors.
fn map_pool_error(error: PoolError) -> AnimalRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            AnimalRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to animal repository errors.
///
/// `requested_id` is the caller-supplied key of an insert; a unique violation
/// without one cannot be attributed and is reported as a query failure.
fn map_diesel_error(
    error: diesel::result::Error,
    requested_id: Option<AnimalId>,
) -> AnimalRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                column = info.column_name(),
                "diesel operation failed"
            );
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => match requested_id {
            Some(id) => AnimalRepositoryError::duplicate_id(id),
            None => AnimalRepositoryError::query("unique constraint violated"),
        },
        DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, info) => {
            AnimalRepositoryError::missing_value(info.column_name().unwrap_or("unknown"))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            AnimalRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => AnimalRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => AnimalRepositoryError::query("database query error"),
        _ => AnimalRepositoryError::query("database error"),
    }
}

/// Convert a database row into a domain animal.
///
/// Write-side validation is not reapplied; any row the table accepts is
/// readable.
fn row_to_animal(row: AnimalRow) -> Animal {
    let AnimalRow {
        id,
        name,
        weight,
        diet,
    } = row;
    Animal::from_storage(AnimalId::from_uuid(id), name, weight, diet)
}

#[async_trait]
impl AnimalRepository for DieselAnimalRepository {
    async fn insert(&self, animal: &NewAnimal) -> Result<Animal, AnimalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewAnimalRow {
            id: animal.id.map(|id| *id.as_uuid()),
            name: animal.draft.name.as_str(),
            weight: animal.draft.weight.get(),
            diet: animal.draft.diet.as_str(),
        };

        let stored: AnimalRow = diesel::insert_into(animals::table)
            .values(&new_row)
            .returning(AnimalRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, animal.id))?;

        Ok(row_to_animal(stored))
    }

    async fn list(&self) -> Result<Vec<Animal>, AnimalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AnimalRow> = animals::table
            .order((animals::name.asc(), animals::id.asc()))
            .select(AnimalRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        Ok(rows.into_iter().map(row_to_animal).collect())
    }

    async fn find_by_id(&self, id: &AnimalId) -> Result<Option<Animal>, AnimalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AnimalRow> = animals::table
            .find(*id.as_uuid())
            .select(AnimalRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        Ok(row.map(row_to_animal))
    }

    async fn update(
        &self,
        id: &AnimalId,
        draft: &AnimalDraft,
    ) -> Result<Option<Animal>, AnimalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = AnimalUpdate {
            name: draft.name.as_str(),
            weight: draft.weight.get(),
            diet: draft.diet.as_str(),
        };

        let row: Option<AnimalRow> = diesel::update(animals::table.find(*id.as_uuid()))
            .set(&changes)
            .returning(AnimalRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        Ok(row.map(row_to_animal))
    }

    async fn delete(&self, id: &AnimalId) -> Result<bool, AnimalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(animals::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        Ok(deleted > 0)
    }
}

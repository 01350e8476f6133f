//! Schema bootstrap for the animals table.
//!
//! The baseline DDL in `migrations/` is embedded into the binary and applied
//! on a blocking Diesel connection. Already applied baselines are skipped, so
//! calling [`apply_schema`] on every start is safe.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Schema baseline embedded from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying the schema baseline.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The database could not be reached.
    #[error("failed to connect for schema setup: {message}")]
    Connect { message: String },
    /// The DDL failed to apply.
    #[error("failed to apply schema: {message}")]
    Apply { message: String },
}

/// Apply the embedded schema baseline to `database_url`.
///
/// Blocks the calling thread; async callers should run it on a blocking
/// task.
///
/// # Errors
///
/// Returns [`SchemaError::Connect`] when the database is unreachable and
/// [`SchemaError::Apply`] when the DDL is rejected.
pub fn apply_schema(database_url: &str) -> Result<(), SchemaError> {
    let mut connection = PgConnection::establish(database_url).map_err(|err| SchemaError::Connect {
        message: err.to_string(),
    })?;
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| SchemaError::Apply {
            message: err.to_string(),
        })?;
    info!(applied = applied.len(), "animal schema is up to date");
    Ok(())
}

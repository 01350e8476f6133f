//! Shared embedded PostgreSQL helpers for integration tests.
//!
//! - Database reset and creation use `postgres` on the maintenance database,
//!   since `CREATE DATABASE` cannot run inside a transaction block.
//! - Schema setup runs the embedded baseline through the crate's own
//!   `apply_schema`, so tests exercise the same DDL the server applies.

use dinos::outbound::persistence::{SchemaError, apply_schema};
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

use super::format_postgres_error;

const MAINTENANCE_DB: &str = "postgres";

/// Drop and recreate `name` on the cluster, returning its connection URL.
///
/// `name` must be a plain identifier; it is interpolated into DDL.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let admin_url = cluster.connection().database_url(MAINTENANCE_DB);
    let mut client = Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;

    client
        .batch_execute(&format!("DROP DATABASE IF EXISTS {name}"))
        .map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE {name}"))
        .map_err(|err| format_postgres_error(&err))?;

    Ok(cluster.connection().database_url(name))
}

/// Apply the canonical animal schema to `url`.
pub fn migrate_schema(url: &str) -> Result<(), SchemaError> {
    apply_schema(url)
}

/// Execute a SQL fixture file (relative to `backend/tests/fixtures`) against
/// `url`.
pub fn apply_sql_fixture(url: &str, fixture: &str) -> Result<(), String> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(fixture);
    let sql = std::fs::read_to_string(&path)
        .map_err(|err| format!("read {}: {err}", path.display()))?;
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&sql)
        .map_err(|err| format_postgres_error(&err))
}

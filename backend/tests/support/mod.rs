//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, which
//! makes it awkward to share small helpers without copy/paste. Suites pull in
//! this module with `mod support;` and use what they need.

#![allow(
    dead_code,
    unused_imports,
    reason = "each integration test crate uses a different subset of helpers"
)]

pub mod cluster_skip;
pub mod embedded_postgres;
pub mod pg_embed;

pub use cluster_skip::{embedded_postgres_requested, handle_cluster_setup_failure};
pub use embedded_postgres::{apply_sql_fixture, migrate_schema, reset_database};
pub use pg_embed::test_cluster;

/// Render a `postgres` error with enough detail to be useful in CI logs.
///
/// The `postgres::Error` `Display` implementation often collapses database
/// errors to a generic `db error`, which hides the message and SQLSTATE.
/// Prefer using `as_db_error()` when available so failures are actionable.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );

    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }

    if let Some(column) = db_error.column() {
        summary.push_str("; column: ");
        summary.push_str(column);
    }

    if let Some(constraint) = db_error.constraint() {
        summary.push_str("; constraint: ");
        summary.push_str(constraint);
    }

    summary
}

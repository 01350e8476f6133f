//! Helpers for controlling embedded test cluster behaviour.
//!
//! Suites that need embedded PostgreSQL are opt-in: they only run when
//! `RUN_PG_EMBEDDED=1`, and cluster start-up failures can be downgraded to
//! skips with `SKIP_TEST_CLUSTER`.

fn is_truthy(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Returns true when embedded PostgreSQL suites have been requested.
pub fn embedded_postgres_requested() -> bool {
    is_truthy("RUN_PG_EMBEDDED")
}

/// Returns true when the `SKIP_TEST_CLUSTER` environment variable is set to a
/// truthy value.
///
/// Truthy values: "1", "true", "yes" (case-insensitive).
pub fn should_skip_test_cluster() -> bool {
    is_truthy("SKIP_TEST_CLUSTER")
}

/// Handles embedded cluster setup failures consistently across integration tests.
///
/// When `SKIP_TEST_CLUSTER` is truthy, prints a skip marker and returns `None`.
/// Otherwise, panics with a clear failure message so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

//! Optional embedded Postgres smoke test gated by RUN_PG_EMBEDDED.
//! Use `cargo test -- --ignored` with `RUN_PG_EMBEDDED=1` to run it.

mod support;

use support::{embedded_postgres_requested, test_cluster};

#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn pg_embedded_cluster_starts() {
    if !embedded_postgres_requested() {
        eprintln!("SKIP-TEST-CLUSTER: set RUN_PG_EMBEDDED=1 to run");
        return;
    }

    let cluster = test_cluster().expect("embedded Postgres should start");
    let connection = cluster.connection();
    assert!(connection.port() > 0, "cluster exposes a port");
    let url = connection.database_url("dinos_db");
    assert!(
        url.starts_with("postgresql://"),
        "database URL should start with postgresql://"
    );
}

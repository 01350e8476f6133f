//! Bootstrap embedded PostgreSQL clusters for integration tests.
//!
//! `pg-embed-setup-unpriv` installs binaries and data under `/var/tmp` by
//! default. When `PG_RUNTIME_DIR`/`PG_DATA_DIR` are not set, bootstrap is
//! redirected to a unique directory under the Cargo target dir so sandboxed
//! runs work. Environment changes are held under `env_lock` for the duration
//! of the bootstrap only.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use uuid::Uuid;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(500);

const TRANSIENT_PATTERNS: [&str; 6] = [
    "error decoding response body",
    "connection reset",
    "timed out",
    "timeout",
    "temporarily unavailable",
    "dns error",
];

fn scratch_dirs() -> std::io::Result<(PathBuf, PathBuf)> {
    let target = std::env::var_os("CARGO_TARGET_DIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("target"),
        PathBuf::from,
    );
    let base = target
        .join("pg-embed")
        .join(format!("dinos-{}-{}", std::process::id(), Uuid::new_v4()));
    let runtime_dir = base.join("install");
    let data_dir = base.join("data");
    std::fs::create_dir_all(&runtime_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    Ok((runtime_dir, data_dir))
}

fn is_transient(message: &str) -> bool {
    let lower = message.to_lowercase();
    TRANSIENT_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
}

/// Start a [`TestCluster`], retrying binary downloads that fail transiently.
pub fn test_cluster() -> Result<TestCluster, String> {
    let _bootstrap = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    let needs_dirs =
        std::env::var_os("PG_RUNTIME_DIR").is_none() || std::env::var_os("PG_DATA_DIR").is_none();
    let _env = if needs_dirs {
        let (runtime_dir, data_dir) = scratch_dirs().map_err(|err| err.to_string())?;
        Some(env_lock::lock_env([
            ("PG_RUNTIME_DIR", Some(runtime_dir.to_string_lossy().into_owned())),
            ("PG_DATA_DIR", Some(data_dir.to_string_lossy().into_owned())),
        ]))
    } else {
        None
    };

    let mut attempt = 0;
    loop {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                let message = format!("{err:?}");
                if attempt >= MAX_RETRIES || !is_transient(&message) {
                    return Err(message);
                }
                attempt += 1;
                eprintln!("pg-embed: transient failure (attempt {attempt}), retrying: {message}");
                std::thread::sleep(RETRY_DELAY * attempt);
            }
        }
    }
}

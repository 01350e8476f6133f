//! Builders for HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use dinos::inbound::http::state::HttpState;
use dinos::outbound::memory::InMemoryAnimalRepository;
use dinos::outbound::persistence::DieselAnimalRepository;

use super::ServerConfig;

/// Build the shared HTTP state over the configured pool, or over a
/// process-local store when no database is configured.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match config.db_pool.as_ref() {
        Some(pool) => {
            info!("serving animals from PostgreSQL");
            HttpState::over_repository(Arc::new(DieselAnimalRepository::new(pool.clone())))
        }
        None => {
            warn!("no database configured; animals are kept in memory until shutdown");
            HttpState::over_repository(Arc::new(InMemoryAnimalRepository::default()))
        }
    };
    web::Data::new(state)
}

//! Inputs for [`create_server`](super::create_server).

use std::net::SocketAddr;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use dinos::outbound::persistence::DbPool;

/// Listening address plus the optional backends the app is wired to.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    /// `None` keeps animals in process memory instead of PostgreSQL.
    pub(crate) db_pool: Option<DbPool>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    #[must_use]
    pub fn with_db_pool(self, db_pool: DbPool) -> Self {
        Self {
            db_pool: Some(db_pool),
            ..self
        }
    }

    /// Wrap every request in the Prometheus middleware and expose its
    /// endpoint.
    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn with_metrics(self, prometheus: PrometheusMetrics) -> Self {
        Self {
            prometheus: Some(prometheus),
            ..self
        }
    }
}

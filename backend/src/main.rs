//! Backend entry-point: loads settings, prepares the database, and serves the
//! animal registry over HTTP.

mod server;

use std::ffi::OsString;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use color_eyre::eyre::{Context, Result, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use dinos::inbound::http::health::HealthState;
use dinos::outbound::persistence::{DbPool, PoolConfig, apply_schema};
use dinos::settings::AppSettings;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args: Vec<OsString> = std::env::args_os().collect();
    let settings = AppSettings::load_from_iter(args).wrap_err("load settings")?;
    let bind_addr = settings.bind_addr()?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(database_url) = settings.database_url() {
        if settings.apply_schema {
            prepare_schema(database_url.clone()).await?;
        }
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_connections(settings.max_connections()),
        )
        .await
        .wrap_err("build database pool")?;
        config = config.with_db_pool(pool);
    }

    #[cfg(feature = "metrics")]
    {
        config = config.with_metrics(make_metrics()?);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting animal registry server");
    let server = create_server(health_state, config).wrap_err("start HTTP server")?;
    server.await.wrap_err("HTTP server failed")
}

/// Apply the schema baseline on a blocking thread.
async fn prepare_schema(database_url: String) -> Result<()> {
    tokio::task::spawn_blocking(move || apply_schema(&database_url))
        .await
        .map_err(|err| eyre!("schema task panicked: {err}"))?
        .wrap_err("apply animal schema")
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Result<actix_web_prom::PrometheusMetrics> {
    PrometheusMetricsBuilder::new("dinos")
        .endpoint("/metrics")
        .build()
        .map_err(|err| eyre!("configure Prometheus metrics: {err}"))
}

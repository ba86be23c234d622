use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use cakeshop::router::init_router;
use cakeshop::state::init_app_state;
use cakeshop_config::{AdminConfig, CorsConfig, JwtConfig, ServerConfig};
use cakeshop_observability::{init_metrics, init_tracing};
use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::Notify;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "cakeshop")]
#[command(about = "Cakeshop account service", long_about = None)]
struct Cli {
    /// Interface to bind, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides PORT
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let mut server_config = ServerConfig::from_env();
    if let Some(host) = cli.host {
        server_config.host = host;
    }
    if let Some(port) = cli.port {
        server_config.port = port;
    }

    let _log_guard = init_tracing(&server_config.log_dir);
    let metrics = init_metrics(server_config.metrics_enabled);

    let state = init_app_state(
        JwtConfig::from_env(),
        AdminConfig::from_env(),
        server_config.clone(),
        CorsConfig::from_env(),
    )
    .await
    .map_err(|e| e.error)
    .context("failed to initialise application state")?;

    let app = init_router(state, metrics);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    info!(address = %address, "server listening");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    let stopping = Arc::new(Notify::new());
    let signal = stopping.clone();
    let mut server = tokio::spawn(
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                signal.notify_one();
            })
            .into_future(),
    );

    let drain_timeout = Duration::from_secs(server_config.shutdown_timeout_secs);
    tokio::select! {
        result = &mut server => {
            result.context("server task failed")??;
        }
        _ = async {
            stopping.notified().await;
            tokio::time::sleep(drain_timeout).await;
        } => {
            warn!(timeout_secs = drain_timeout.as_secs(), "in-flight requests did not drain in time");
            server.abort();
        }
    }

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, draining connections");
}

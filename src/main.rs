//! Proxy worker entry point.

use std::path::Path;
use tokio::net::TcpListener;

use proxy_worker::config::{load_config, WorkerConfig};
use proxy_worker::http::HttpServer;
use proxy_worker::lifecycle::Shutdown;
use proxy_worker::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("proxy-worker v0.1.0 starting");

    // Optional config file path as the only argument; defaults otherwise.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => WorkerConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        default_timeout_secs = config.defaults.timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

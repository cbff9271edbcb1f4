use crate::backend::HttpBackend;
use crate::config::Config;
use crate::controller::SelectionController;
use crate::router::handle;
use anyhow::Context;
use astra::Server;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod backend;
mod config;
mod controller;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Configuration from the environment
    let config = Config::from_env().context("Invalid configuration")?;

    // 2️⃣ Backend client, shared by every worker through the controller
    let backend = HttpBackend::new(config.backend_url.clone(), config.http_timeout)
        .context("Failed to build the backend HTTP client")?;
    let controller = SelectionController::new(backend);

    // 3️⃣ Start the server
    info!(
        addr = %config.bind_addr,
        backend = %config.backend_url,
        workers = config.max_workers,
        "Starting server at http://{}",
        config.bind_addr
    );

    let server = Server::bind(config.bind_addr).max_workers(config.max_workers);

    server
        .serve(move |req, _info| match handle(req, &controller) {
            Ok(resp) => resp,
            Err(err) => {
                warn!(error = %err, "request failed");
                templates::html_error_response(err)
            }
        })
        .context("Server ended with error")?;

    info!("Server shut down cleanly.");
    Ok(())
}

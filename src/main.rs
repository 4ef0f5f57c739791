//! Runs the taskdeck HTTP server.
//!
//! Configuration is read from `taskdeck.toml` and `TASKDECK_*` environment
//! variables; see [`taskdeck::config`]. Log output is controlled with
//! `RUST_LOG`.

use eyre::WrapErr;
use taskdeck::{config::ServerConfig, server, telemetry};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    telemetry::init()?;
    let config = ServerConfig::load().wrap_err("failed to load configuration")?;
    server::run(config).await
}

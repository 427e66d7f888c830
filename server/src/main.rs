// server/src/main.rs

// Entry point for the `booking` binary: runs the REST API or acts as a client
// against a running instance.

use anyhow::Result;
use booking_server::cli::{start_cli, CliArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    start_cli(CliArgs::parse()).await
}

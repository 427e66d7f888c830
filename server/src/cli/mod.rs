// server/src/cli/mod.rs

pub mod cli;
pub mod client;
pub mod commands;

pub use cli::start_cli;
pub use client::{ApiResponse, BookingClient};
pub use commands::{CliArgs, Commands, DEFAULT_API_URL};

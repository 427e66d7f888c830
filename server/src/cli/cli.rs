// server/src/cli/cli.rs

// Dispatches parsed CLI arguments: `serve` runs the REST API in-process,
// everything else is a client call against `--api`, asserting the role under
// `--role-header`.

use anyhow::{anyhow, Result};
use booking_engine::{load_booking_config, BookingConfig};
use tracing::{info, warn};

use crate::cli::client::{ApiResponse, BookingClient};
use crate::cli::commands::{CliArgs, Commands};

pub async fn start_cli(args: CliArgs) -> Result<()> {
    match args.command {
        Commands::Serve { config, host, port } => {
            let mut booking_config = load_booking_config(config.as_deref())?;
            apply_overrides(&mut booking_config, host, port);
            rest_api::start_server(&booking_config, shutdown_signal()).await
        }
        command => {
            let client = BookingClient::new(&args.api, &args.role_header)?;
            let response = run_client(&client, command).await?;
            println!("{}", response.render());
            Ok(())
        }
    }
}

async fn run_client(client: &BookingClient, command: Commands) -> Result<ApiResponse> {
    match command {
        Commands::Doctors => client.list_doctors().await,
        Commands::Create { role, doctor_id, patient_name, date, time, comment } => {
            client
                .create(&role, doctor_id, &patient_name, &date, &time, &comment.join(" "))
                .await
        }
        Commands::List { role } => client.list(&role).await,
        Commands::Get { role, id } => client.get(&role, id).await,
        Commands::Update { role, id, date, time, comment } => {
            client.update(&role, id, &date, &time, &comment.join(" ")).await
        }
        Commands::Delete { role, id } => client.delete(&role, id).await,
        Commands::Serve { .. } => Err(anyhow!("'serve' is not a client command")),
    }
}

fn apply_overrides(config: &mut BookingConfig, host: Option<String>, port: Option<u16>) {
    if let Some(host) = host {
        config.rest.host = host;
    }
    if let Some(port) = port {
        config.rest.port = port;
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down."),
        Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_values() {
        let mut config = BookingConfig::default();
        apply_overrides(&mut config, None, Some(9200));
        assert_eq!(config.rest.port, 9200);
        assert_eq!(config.rest.host, "127.0.0.1");

        apply_overrides(&mut config, Some("0.0.0.0".to_string()), None);
        assert_eq!(config.rest.host, "0.0.0.0");
        assert_eq!(config.rest.port, 9200);
    }
}

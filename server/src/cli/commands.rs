// server/src/cli/commands.rs

// Command-line arguments and subcommands for the booking CLI, using `clap`.
use booking_engine::config::DEFAULT_ROLE_HEADER;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Parser)]
#[command(name = "booking")]
#[command(version)]
#[command(about = "Doctor appointment booking service and client")]
pub struct CliArgs {
    /// Base URL of a running booking API (client commands only)
    #[arg(long, global = true, env = "BOOKING_API_URL", default_value = DEFAULT_API_URL)]
    pub api: String,

    /// Header the server reads the role from (client commands only)
    #[arg(long, global = true, env = "BOOKING_ROLE_HEADER", default_value = DEFAULT_ROLE_HEADER)]
    pub role_header: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Commands {
    /// Run the REST API server
    Serve {
        #[arg(long, short = 'c', value_hint = clap::ValueHint::FilePath)]
        config: Option<PathBuf>,
        #[arg(long)]
        host: Option<String>,
        #[arg(long, short = 'p')]
        port: Option<u16>,
    },
    /// Show the doctor roster
    Doctors,
    /// Book an appointment
    Create {
        role: String,
        doctor_id: u32,
        patient_name: String,
        date: String,
        time: String,
        /// Free-text comment; remaining words are joined with spaces
        comment: Vec<String>,
    },
    /// List all appointments (admin only)
    List { role: String },
    /// Show one appointment
    Get { role: String, id: u64 },
    /// Move an appointment (admin only)
    Update {
        role: String,
        id: u64,
        date: String,
        time: String,
        comment: Vec<String>,
    },
    /// Delete an appointment (admin only)
    Delete { role: String, id: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_create_with_multi_word_comment() {
        let args = CliArgs::try_parse_from([
            "booking", "create", "user", "2", "Ivan", "2025-11-01", "10:00", "back", "pain",
        ])
        .unwrap();
        assert_eq!(args.api, DEFAULT_API_URL);
        assert_eq!(args.role_header, DEFAULT_ROLE_HEADER);
        assert_eq!(
            args.command,
            Commands::Create {
                role: "user".into(),
                doctor_id: 2,
                patient_name: "Ivan".into(),
                date: "2025-11-01".into(),
                time: "10:00".into(),
                comment: vec!["back".into(), "pain".into()],
            }
        );
    }

    #[test]
    fn comment_is_optional() {
        let args =
            CliArgs::try_parse_from(["booking", "update", "admin", "1", "2025-11-02", "11:00"]).unwrap();
        match args.command {
            Commands::Update { id, comment, .. } => {
                assert_eq!(id, 1);
                assert!(comment.is_empty());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn should_accept_api_override_after_subcommand() {
        let args = CliArgs::try_parse_from(["booking", "list", "admin", "--api", "http://localhost:9000"])
            .unwrap();
        assert_eq!(args.api, "http://localhost:9000");
        assert_eq!(args.command, Commands::List { role: "admin".into() });
    }

    #[test]
    fn should_accept_role_header_override() {
        let args = CliArgs::try_parse_from(["booking", "get", "user", "7", "--role-header", "X-Caller-Role"])
            .unwrap();
        assert_eq!(args.role_header, "X-Caller-Role");
        assert_eq!(args.command, Commands::Get { role: "user".into(), id: 7 });
    }

    #[test]
    fn should_reject_non_numeric_ids() {
        assert!(CliArgs::try_parse_from(["booking", "get", "user", "one"]).is_err());
        assert!(CliArgs::try_parse_from(["booking", "list"]).is_err());
    }

    #[test]
    fn should_parse_serve_overrides() {
        let args = CliArgs::try_parse_from(["booking", "serve", "-p", "9100", "--config", "booking.yaml"])
            .unwrap();
        assert_eq!(
            args.command,
            Commands::Serve {
                config: Some(PathBuf::from("booking.yaml")),
                host: None,
                port: Some(9100),
            }
        );
    }
}

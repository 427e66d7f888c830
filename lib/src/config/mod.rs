// lib/src/config/mod.rs
use anyhow::{Context, Result};
use ::config::{Config, Environment, File, FileFormat};
use std::path::Path;
use tracing::info;

pub mod config_defaults;
pub mod config_structs;

pub use config_defaults::*;
pub use config_structs::{BookingConfig, RestApiConfig};

/// Loads configuration: built-in defaults, then the YAML file at `path` (if
/// given), then `BOOKING_*` environment variables (`__` separates nested keys,
/// e.g. `BOOKING_REST__PORT=9000`).
pub fn load_booking_config(path: Option<&Path>) -> Result<BookingConfig> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        info!("Loading booking config from {}", path.display());
        builder = builder.add_source(File::from(path).format(FileFormat::Yaml).required(true));
    }
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config: BookingConfig = builder
        .build()
        .context("Failed to read booking configuration")?
        .try_deserialize()
        .context("Failed to parse booking configuration")?;
    config.validate().context("Invalid booking configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn write_yaml(content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_seed_three_doctors() {
        let config = BookingConfig::default();
        assert_eq!(config.doctors.len(), 3);
        assert_eq!(config.rest.port, 8000);
        assert_eq!(config.role_header, "x-user-role");
        assert!(config.check_update_conflicts);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_load_partial_yaml_over_defaults() {
        let file = write_yaml(
            "rest:\n  port: 9100\ncheck_update_conflicts: false\ndoctors:\n  - id: 7\n    name: House G.\n    specialty: Diagnostician\n    cabinet: \"404\"\n",
        );
        let config = load_booking_config(Some(file.path())).unwrap();
        assert_eq!(config.rest.port, 9100);
        assert_eq!(config.rest.host, "127.0.0.1");
        assert!(!config.check_update_conflicts);
        assert_eq!(config.doctors.len(), 1);
        assert_eq!(config.doctors[0].id, 7);
        assert_eq!(config.doctors[0].cabinet, "404");
    }

    #[test]
    fn should_reject_duplicate_doctor_ids() {
        let file = write_yaml(
            "doctors:\n  - {id: 1, name: A, specialty: X, cabinet: \"1\"}\n  - {id: 1, name: B, specialty: Y, cabinet: \"2\"}\n",
        );
        let err = load_booking_config(Some(file.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("Duplicate doctor id 1"));
    }

    #[test]
    fn should_reject_bad_role_header() {
        let config = BookingConfig {
            role_header: "X User Role".to_string(),
            ..BookingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_booking_config(Some(Path::new("/nonexistent/booking.yaml")));
        assert!(result.is_err());
    }
}

// lib/src/config/config_defaults.rs
use models::Doctor;
pub use models::DEFAULT_ROLE_HEADER;

pub const DEFAULT_REST_HOST: &str = "127.0.0.1";
pub const DEFAULT_REST_PORT: u16 = 8000;
pub const ENV_PREFIX: &str = "BOOKING";

pub fn default_host() -> String { DEFAULT_REST_HOST.to_string() }
pub fn default_port() -> u16 { DEFAULT_REST_PORT }
pub fn default_role_header() -> String { DEFAULT_ROLE_HEADER.to_string() }
pub fn default_check_update_conflicts() -> bool { true }

// Seed roster used when no `doctors:` list is configured.
pub fn default_doctors() -> Vec<Doctor> {
    vec![
        Doctor::new(1, "Ivanov I.I.", "Therapist", "101"),
        Doctor::new(2, "Petrov P.P.", "Surgeon", "202"),
        Doctor::new(3, "Sidorova A.A.", "Cardiologist", "303"),
    ]
}

// lib/src/config/config_structs.rs
use anyhow::{anyhow, Result};
use models::Doctor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::config_defaults::*;

/// Represents the configuration for the REST API server itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        RestApiConfig {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default)]
    pub rest: RestApiConfig,
    /// Request header carrying the caller's role assertion.
    #[serde(default = "default_role_header")]
    pub role_header: String,
    /// Re-check double booking when an appointment is moved.
    #[serde(default = "default_check_update_conflicts")]
    pub check_update_conflicts: bool,
    #[serde(default = "default_doctors")]
    pub doctors: Vec<Doctor>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            rest: RestApiConfig::default(),
            role_header: default_role_header(),
            check_update_conflicts: default_check_update_conflicts(),
            doctors: default_doctors(),
        }
    }
}

impl BookingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.doctors.is_empty() {
            return Err(anyhow!("Doctor roster must not be empty"));
        }
        let mut seen = HashSet::new();
        for doctor in &self.doctors {
            if doctor.id == 0 {
                return Err(anyhow!("Doctor '{}' has id 0; ids must be positive", doctor.name));
            }
            if !seen.insert(doctor.id) {
                return Err(anyhow!("Duplicate doctor id {} in roster", doctor.id));
            }
        }
        let header_ok = !self.role_header.is_empty()
            && self
                .role_header
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !header_ok {
            return Err(anyhow!("Invalid role header name: '{}'", self.role_header));
        }
        Ok(())
    }
}

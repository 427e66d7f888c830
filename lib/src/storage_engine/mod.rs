// lib/src/storage_engine/mod.rs

pub mod inmemory_storage;
pub mod storage_engine;

pub use inmemory_storage::InMemoryAppointmentStorage;
pub use storage_engine::AppointmentStorage;

use std::sync::Arc;

use crate::config::BookingConfig;
use crate::registry::DoctorRegistry;

/// Creates the appointment store for the given configuration.
pub fn create_storage(config: &BookingConfig, registry: Arc<DoctorRegistry>) -> Arc<dyn AppointmentStorage> {
    Arc::new(
        InMemoryAppointmentStorage::new(registry)
            .with_update_conflict_check(config.check_update_conflicts),
    )
}

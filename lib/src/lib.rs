// lib/src/lib.rs
// Booking engine: doctor registry, appointment store and service configuration.

pub mod config;
pub mod registry;
pub mod storage_engine;

pub use crate::config::{load_booking_config, BookingConfig, RestApiConfig};
pub use crate::registry::DoctorRegistry;
pub use crate::storage_engine::{create_storage, AppointmentStorage, InMemoryAppointmentStorage};

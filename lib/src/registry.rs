// lib/src/registry.rs
use models::{BookingError, BookingResult, Doctor, DoctorId};

/// Read-only roster of doctors, fixed at startup.
#[derive(Debug, Clone)]
pub struct DoctorRegistry {
    doctors: Vec<Doctor>,
}

impl DoctorRegistry {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        DoctorRegistry { doctors }
    }

    pub fn find(&self, doctor_id: DoctorId) -> BookingResult<&Doctor> {
        self.doctors
            .iter()
            .find(|d| d.id == doctor_id)
            .ok_or(BookingError::DoctorNotFound(doctor_id))
    }

    /// All doctors in seed order.
    pub fn all(&self) -> &[Doctor] {
        &self.doctors
    }
}

impl Default for DoctorRegistry {
    fn default() -> Self {
        DoctorRegistry::new(crate::config::default_doctors())
    }
}

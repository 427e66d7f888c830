// models/src/medical/doctor.rs
use serde::{Deserialize, Serialize};

pub type DoctorId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
    pub cabinet: String,
}

impl Doctor {
    pub fn new(id: DoctorId, name: &str, specialty: &str, cabinet: &str) -> Self {
        Doctor {
            id,
            name: name.to_string(),
            specialty: specialty.to_string(),
            cabinet: cabinet.to_string(),
        }
    }
}

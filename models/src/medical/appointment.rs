// models/src/medical/appointment.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::medical::DoctorId;

pub type AppointmentId = u64;

/// A booked visit. `id`, `doctor_id` and `patient_name` never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub doctor_id: DoctorId,
    pub patient_name: String,
    pub date: NaiveDate,
    /// Opaque slot token such as "10:00"; compared for equality only.
    pub time: String,
    #[serde(default)]
    pub comment: String,
}

impl Appointment {
    pub fn from_new(id: AppointmentId, new: NewAppointment) -> Self {
        Appointment {
            id,
            doctor_id: new.doctor_id,
            patient_name: new.patient_name,
            date: new.date,
            time: new.time,
            comment: new.comment,
        }
    }

    /// True if this appointment holds the given doctor's slot.
    pub fn occupies(&self, doctor_id: DoctorId, date: NaiveDate, time: &str) -> bool {
        self.doctor_id == doctor_id && self.date == date && self.time == time
    }

    pub fn apply(&mut self, changes: AppointmentChanges) {
        self.date = changes.date;
        self.time = changes.time;
        self.comment = changes.comment;
    }
}

/// Fields a caller supplies to book a new appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub doctor_id: DoctorId,
    pub patient_name: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(default)]
    pub comment: String,
}

impl NewAppointment {
    pub fn validate(&self) -> ValidationResult<()> {
        if self.patient_name.trim().is_empty() {
            return Err(ValidationError::EmptyField("patient_name"));
        }
        validate_time(&self.time)
    }
}

/// The mutable part of an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentChanges {
    pub date: NaiveDate,
    pub time: String,
    #[serde(default)]
    pub comment: String,
}

impl AppointmentChanges {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_time(&self.time)
    }
}

fn validate_time(time: &str) -> ValidationResult<()> {
    if time.trim().is_empty() {
        Err(ValidationError::EmptyField("time"))
    } else {
        Ok(())
    }
}

/// Parses an ISO `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| ValidationError::InvalidDateFormat(format!("'{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_appointment() -> NewAppointment {
        NewAppointment {
            doctor_id: 2,
            patient_name: "Ivan".to_string(),
            date: parse_date("2025-11-01").unwrap(),
            time: "10:00".to_string(),
            comment: String::new(),
        }
    }

    #[test]
    fn should_reject_blank_patient_name() {
        let mut new = new_appointment();
        new.patient_name = "   ".to_string();
        assert_eq!(new.validate(), Err(ValidationError::EmptyField("patient_name")));
    }

    #[test]
    fn should_reject_blank_time() {
        let mut new = new_appointment();
        new.time = String::new();
        assert_eq!(new.validate(), Err(ValidationError::EmptyField("time")));
    }

    #[test]
    fn occupies_compares_time_as_opaque_token() {
        let appointment = Appointment::from_new(1, new_appointment());
        let date = parse_date("2025-11-01").unwrap();
        assert!(appointment.occupies(2, date, "10:00"));
        assert!(!appointment.occupies(2, date, "10:00:00"));
        assert!(!appointment.occupies(1, date, "10:00"));
    }

    #[test]
    fn apply_keeps_identity_fields() {
        let mut appointment = Appointment::from_new(7, new_appointment());
        appointment.apply(AppointmentChanges {
            date: parse_date("2025-11-02").unwrap(),
            time: "11:00".to_string(),
            comment: "moved".to_string(),
        });
        assert_eq!(appointment.id, 7);
        assert_eq!(appointment.doctor_id, 2);
        assert_eq!(appointment.patient_name, "Ivan");
        assert_eq!(appointment.time, "11:00");
        assert_eq!(appointment.comment, "moved");
    }

    #[test]
    fn should_reject_malformed_dates() {
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("01.11.2025").is_err());
    }

    #[test]
    fn serializes_date_as_iso_string() {
        let appointment = Appointment::from_new(1, new_appointment());
        let json = serde_json::to_value(&appointment).unwrap();
        assert_eq!(json["date"], "2025-11-01");
        assert_eq!(json["comment"], "");
    }
}

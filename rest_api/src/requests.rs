// rest_api/src/requests.rs
//
// Typed query-string parameters, one struct per operation. Unknown fields
// are rejected during extraction; absent required fields are reported by name.

use models::medical::parse_date;
use models::{AppointmentChanges, DoctorId, NewAppointment, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CreateAppointmentParams {
    pub doctor_id: Option<DoctorId>,
    pub patient_name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub comment: Option<String>,
}

fn required<T>(value: Option<T>, field: &'static str) -> ValidationResult<T> {
    value.ok_or(ValidationError::MissingField(field))
}

impl CreateAppointmentParams {
    pub fn into_new_appointment(self) -> ValidationResult<NewAppointment> {
        let new = NewAppointment {
            doctor_id: required(self.doctor_id, "doctor_id")?,
            patient_name: required(self.patient_name, "patient_name")?,
            date: parse_date(&required(self.date, "date")?)?,
            time: required(self.time, "time")?,
            comment: self.comment.unwrap_or_default(),
        };
        new.validate()?;
        Ok(new)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateAppointmentParams {
    pub date: Option<String>,
    pub time: Option<String>,
    pub comment: Option<String>,
}

impl UpdateAppointmentParams {
    pub fn into_changes(self) -> ValidationResult<AppointmentChanges> {
        let changes = AppointmentChanges {
            date: parse_date(&required(self.date, "date")?)?,
            time: required(self.time, "time")?,
            comment: self.comment.unwrap_or_default(),
        };
        changes.validate()?;
        Ok(changes)
    }
}

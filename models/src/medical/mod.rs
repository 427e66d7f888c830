// models/src/medical/mod.rs
pub mod appointment;
pub mod doctor;
pub mod role;

pub use appointment::{parse_date, Appointment, AppointmentChanges, AppointmentId, NewAppointment};
pub use doctor::{Doctor, DoctorId};
pub use role::{Role, DEFAULT_ROLE_HEADER};

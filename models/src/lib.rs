// models/src/lib.rs
pub mod errors;
pub mod medical;

pub use errors::{BookingError, BookingResult, ValidationError, ValidationResult};
pub use medical::{
    Appointment, AppointmentChanges, AppointmentId, Doctor, DoctorId, NewAppointment, Role,
    DEFAULT_ROLE_HEADER,
};

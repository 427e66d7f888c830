// models/src/errors.rs

use chrono::NaiveDate;
pub use thiserror::Error;

use crate::medical::{AppointmentId, DoctorId};

/// Every failure the booking service can surface to a caller.
///
/// Each variant has a stable machine-readable [`code`](BookingError::code);
/// the `Display` text is detail for humans and may change.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The role assertion was missing or not one of the recognized roles.
    #[error("role must be asserted as 'admin' or 'user' (got {})", .0.as_deref().unwrap_or("nothing"))]
    InvalidRole(Option<String>),

    #[error("role '{role}' may not {operation}")]
    Forbidden { role: String, operation: String },

    #[error("doctor {0} not found")]
    DoctorNotFound(DoctorId),

    #[error("appointment {0} not found")]
    AppointmentNotFound(AppointmentId),

    #[error("doctor {doctor_id} is already booked on {date} at {time}")]
    TimeConflict {
        doctor_id: DoctorId,
        date: NaiveDate,
        time: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl BookingError {
    /// Stable outward code callers can branch on.
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::InvalidRole(_) => "INVALID_ROLE",
            BookingError::Forbidden { .. } => "FORBIDDEN",
            BookingError::DoctorNotFound(_) => "DOCTOR_NOT_FOUND",
            BookingError::AppointmentNotFound(_) => "APPOINTMENT_NOT_FOUND",
            BookingError::TimeConflict { .. } => "TIME_CONFLICT",
            BookingError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

/// Structurally malformed input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    /// A field was present but blank.
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),
    /// An invalid date format was provided.
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),
    /// The request could not be decoded (wrong type, unknown field, bad path).
    #[error("malformed request: {0}")]
    Malformed(String),
}

/// A type alias for a `Result` that returns a `BookingError` on failure.
pub type BookingResult<T> = Result<T, BookingError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;

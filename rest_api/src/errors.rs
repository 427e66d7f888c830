// rest_api/src/errors.rs
use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use models::{BookingError, ValidationError};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// HTTP face of [`BookingError`].
#[derive(Debug, Error)]
#[error(transparent)]
pub struct RestApiError(#[from] pub BookingError);

impl RestApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::InvalidRole(_) => StatusCode::UNAUTHORIZED,
            BookingError::Forbidden { .. } => StatusCode::FORBIDDEN,
            BookingError::DoctorNotFound(_) | BookingError::AppointmentNotFound(_) => StatusCode::NOT_FOUND,
            BookingError::TimeConflict { .. } => StatusCode::CONFLICT,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ValidationError> for RestApiError {
    fn from(err: ValidationError) -> Self {
        RestApiError(BookingError::Validation(err))
    }
}

impl From<QueryRejection> for RestApiError {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::Malformed(rejection.body_text()).into()
    }
}

impl From<PathRejection> for RestApiError {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::Malformed(rejection.body_text()).into()
    }
}

// Implement IntoResponse for RestApiError to convert it into an HTTP response
impl IntoResponse for RestApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.0.code();
        let message = self.0.to_string();
        warn!(%status, code, %message, "request failed");

        let body = Json(json!({
            "status": "error",
            "code": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_kind_to_its_status() {
        let cases = [
            (BookingError::InvalidRole(None), StatusCode::UNAUTHORIZED),
            (
                BookingError::Forbidden { role: "user".into(), operation: "delete appointments".into() },
                StatusCode::FORBIDDEN,
            ),
            (BookingError::DoctorNotFound(4), StatusCode::NOT_FOUND),
            (BookingError::AppointmentNotFound(4), StatusCode::NOT_FOUND),
            (ValidationError::MissingField("date").into(), StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(RestApiError(err).status(), status);
        }
    }
}

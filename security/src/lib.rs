// security/src/lib.rs
use models::{AppointmentId, BookingError, BookingResult, Role};
use tracing::warn;

pub mod middleware;
pub mod roles;

pub use middleware::{HeaderRoleSource, RoleSource};
pub use roles::{has_permission, Operation, PERMISSIONS};

/// Decides whether a recognized role may perform an operation.
///
/// Role recognition happens before this point (see [`RoleSource`]); the
/// policy only ever sees valid roles.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// `resource` is carried into diagnostics only and never affects the decision.
    pub fn authorize(
        &self,
        role: Role,
        operation: Operation,
        resource: Option<AppointmentId>,
    ) -> BookingResult<()> {
        if has_permission(role, operation) {
            return Ok(());
        }
        match resource {
            Some(id) => warn!(%role, %operation, appointment_id = id, "access denied"),
            None => warn!(%role, %operation, "access denied"),
        }
        Err(BookingError::Forbidden {
            role: role.to_string(),
            operation: operation.to_string(),
        })
    }
}

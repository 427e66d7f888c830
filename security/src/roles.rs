// security/src/roles.rs
use models::Role;
use std::fmt;

/// Operations subject to access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateAppointment,
    ListAppointments,
    GetAppointment,
    UpdateAppointment,
    DeleteAppointment,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::CreateAppointment,
        Operation::ListAppointments,
        Operation::GetAppointment,
        Operation::UpdateAppointment,
        Operation::DeleteAppointment,
    ];

    pub fn describe(&self) -> &'static str {
        match self {
            Operation::CreateAppointment => "create appointments",
            Operation::ListAppointments => "list all appointments",
            Operation::GetAppointment => "view appointments",
            Operation::UpdateAppointment => "update appointments",
            Operation::DeleteAppointment => "delete appointments",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// One row per operation: the roles allowed to perform it.
///
/// Listing is admin-only while point lookup by id is open to every role;
/// there is no ownership check on lookups.
pub const PERMISSIONS: &[(Operation, &[Role])] = &[
    (Operation::CreateAppointment, &[Role::User, Role::Admin]),
    (Operation::ListAppointments, &[Role::Admin]),
    (Operation::GetAppointment, &[Role::User, Role::Admin]),
    (Operation::UpdateAppointment, &[Role::Admin]),
    (Operation::DeleteAppointment, &[Role::Admin]),
];

pub fn allowed_roles(operation: Operation) -> &'static [Role] {
    PERMISSIONS
        .iter()
        .find(|(op, _)| *op == operation)
        .map(|(_, roles)| *roles)
        .unwrap_or(&[])
}

pub fn has_permission(role: Role, operation: Operation) -> bool {
    allowed_roles(operation).contains(&role)
}

// models/src/medical/role.rs
use std::fmt;
use std::str::FromStr;

use crate::errors::BookingError;

/// Request header that carries the role assertion unless configured otherwise.
pub const DEFAULT_ROLE_HEADER: &str = "x-user-role";

/// Caller-asserted access label. Not a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Parses an optional assertion; absence is an invalid role.
    pub fn from_assertion(value: Option<&str>) -> Result<Self, BookingError> {
        match value {
            Some(raw) => raw.parse(),
            None => Err(BookingError::InvalidRole(None)),
        }
    }
}

impl FromStr for Role {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(BookingError::InvalidRole(Some(other.to_string()))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_roles() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
    }

    #[test]
    fn should_reject_unknown_and_differently_cased_roles() {
        assert_eq!(
            "Admin".parse::<Role>().unwrap_err(),
            BookingError::InvalidRole(Some("Admin".to_string()))
        );
        assert!("".parse::<Role>().is_err());
        assert!("doctor".parse::<Role>().is_err());
    }

    #[test]
    fn should_reject_missing_assertion() {
        assert_eq!(Role::from_assertion(None).unwrap_err(), BookingError::InvalidRole(None));
        assert_eq!(Role::from_assertion(Some("user")).unwrap(), Role::User);
    }
}

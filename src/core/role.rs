//! Author and viewer roles
//!
//! A closed two-value enum instead of free-form sender strings, so a typo
//! cannot silently introduce a third role.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two sides of a ticket conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The requester who opened the ticket
    User,
    /// A support administrator
    Admin,
}

impl Role {
    /// The side notified by activity this role authors
    #[must_use]
    pub const fn counterpart(self) -> Self {
        match self {
            Self::User => Self::Admin,
            Self::Admin => Self::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "User"),
            Self::Admin => write!(f, "Admin"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("Unknown role: '{s}' (expected user or admin)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counterpart() {
        assert_eq!(Role::User.counterpart(), Role::Admin);
        assert_eq!(Role::Admin.counterpart(), Role::User);
    }

    #[test]
    fn test_parse_rejects_unknown_roles() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert!("moderator".parse::<Role>().is_err());
    }
}

//! Staff roles and portal dispatch.
//!
//! The three portals are served to a closed set of roles. Role strings
//! from the database or JWT claims are parsed into [`Role`] once at the
//! boundary; everything downstream matches on the enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A staff role. Each role maps to exactly one admin portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Office of Senior Citizen Affairs (municipal staff).
    Osca,
    /// Municipal Social Welfare and Development (highest privilege).
    Mswd,
    /// Department of Social Welfare and Development (external validator).
    Dswd,
}

impl Role {
    /// Canonical lowercase name as stored in `users.role` and JWT claims.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Osca => "osca",
            Role::Mswd => "mswd",
            Role::Dswd => "dswd",
        }
    }

    /// Front-end portal path for post-login redirect.
    pub fn portal_path(self) -> &'static str {
        match self {
            Role::Osca => "/admin",
            Role::Mswd => "/super-admin",
            Role::Dswd => "/dswd-admin",
        }
    }

    /// All valid roles, used by admin user creation validation.
    pub const ALL: [Role; 3] = [Role::Osca, Role::Mswd, Role::Dswd];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "osca" => Ok(Role::Osca),
            "mswd" => Ok(Role::Mswd),
            "dswd" => Ok(Role::Dswd),
            other => Err(CoreError::Unauthorized(format!("Unknown role '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_roles() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn portal_paths() {
        assert_eq!(Role::Osca.portal_path(), "/admin");
        assert_eq!(Role::Mswd.portal_path(), "/super-admin");
        assert_eq!(Role::Dswd.portal_path(), "/dswd-admin");
    }

    #[test]
    fn unknown_role_rejected() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("Unknown role"));
    }

    #[test]
    fn case_sensitive_parsing() {
        // Role strings are normalized to lowercase before storage; an
        // uppercase variant reaching here indicates corrupt data.
        assert!("OSCA".parse::<Role>().is_err());
    }
}

//! Project membership roles.
//!
//! These must match the `CHECK` constraint on `project_roles.role` in
//! `20240301000004_create_project_roles_table.sql`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_OWNER: &str = "owner";
pub const ROLE_PARTICIPANT: &str = "participant";

/// The role a user holds in a single project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Created the project; full control over it.
    Owner,
    /// Joined the project; task-level access only.
    Participant,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => ROLE_OWNER,
            Self::Participant => ROLE_PARTICIPANT,
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_OWNER => Ok(Self::Owner),
            ROLE_PARTICIPANT => Ok(Self::Participant),
            other => Err(CoreError::Internal(format!(
                "Unknown project role stored in database: '{other}'"
            ))),
        }
    }
}

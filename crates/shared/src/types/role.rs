//! User roles and the role-home mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of an authenticated principal.
///
/// The set is closed; role dispatch is exhaustive matching, never string
/// comparison, so a missing-role branch is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Bank customer; creates deposits, withdrawals and transfers.
    Client,
    /// Bank agent; reviews and resolves pending operations.
    Agent,
    /// Administrator; manages users in addition to agent duties.
    Admin,
}

impl Role {
    /// Parses a role from its wire representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "CLIENT" => Some(Self::Client),
            "AGENT" => Some(Self::Agent),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Returns the wire representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "CLIENT",
            Self::Agent => "AGENT",
            Self::Admin => "ADMIN",
        }
    }

    /// Returns the landing route for this role.
    #[must_use]
    pub const fn home_path(&self) -> &'static str {
        match self {
            Self::Client => "/client",
            Self::Agent => "/agent",
            Self::Admin => "/admin",
        }
    }

    /// Returns true if the role may act on pending operations.
    #[must_use]
    pub const fn can_resolve_operations(&self) -> bool {
        matches!(self, Self::Agent | Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

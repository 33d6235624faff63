//! The authenticated principal and auth payloads.

use serde::{Deserialize, Serialize};

use crate::types::role::Role;

/// Login request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// User email.
    pub email: String,
    /// User password.
    pub password: String,
}

/// Registration request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// User full name.
    pub full_name: String,
    /// User email.
    pub email: String,
    /// User password.
    pub password: String,
}

/// Response payload of a successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// User email.
    pub email: String,
    /// User full name.
    pub full_name: String,
    /// User role.
    pub role: Role,
    /// Account number, present for clients.
    #[serde(default)]
    pub account_number: Option<String>,
}

/// The authenticated identity held by the session store.
///
/// Created on successful login or registration, destroyed on logout.
/// A principal with an empty token is never considered authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// User email, used as the stable identity.
    pub email: String,
    /// Name shown in the header and dashboards.
    pub display_name: String,
    /// User role.
    pub role: Role,
    /// Account number, present for clients.
    #[serde(default)]
    pub account_number: Option<String>,
    /// Bearer token proving authentication.
    pub token: String,
}

impl Principal {
    /// Returns true iff a non-empty token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

impl From<AuthSession> for Principal {
    fn from(session: AuthSession) -> Self {
        Self {
            email: session.email,
            display_name: session.full_name,
            role: session.role,
            account_number: session.account_number,
            token: session.access_token,
        }
    }
}

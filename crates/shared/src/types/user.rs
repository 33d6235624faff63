//! User administration payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::role::Role;

/// Account status of a managed user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    /// User may log in.
    Active,
    /// User is disabled.
    Inactive,
    /// User is temporarily suspended.
    Suspended,
}

impl UserStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Suspended => "SUSPENDED",
        }
    }
}

/// A managed user as returned by the admin endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend user id.
    pub id: i64,
    /// User full name.
    pub full_name: String,
    /// User email.
    pub email: String,
    /// User role.
    pub role: Role,
    /// Account status.
    pub status: UserStatus,
    /// Account number, present for clients.
    #[serde(default)]
    pub account_number: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// Last login time, if the user ever logged in.
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

/// Partial update of a managed user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// New full name, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// New email, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New role, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// New status, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

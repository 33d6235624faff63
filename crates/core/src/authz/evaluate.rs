//! Pure authorization decision function.

use atlas_shared::{Principal, Role};

/// Outcome of an authorization check.
///
/// Denials carry the redirect target as a value instead of navigating,
/// which keeps the evaluator free of side effects and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Access granted.
    Allow,
    /// Access denied; navigate to the carried route instead.
    Deny {
        /// Where the caller should send the user.
        redirect_to: &'static str,
    },
}

impl AccessDecision {
    /// Returns true if access was granted.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Denial that sends the user to the login screen.
    #[must_use]
    pub const fn deny_to_login() -> Self {
        Self::Deny {
            redirect_to: "/login",
        }
    }

    /// Denial that sends an authenticated user to their role home.
    #[must_use]
    pub const fn deny_to_home(role: Role) -> Self {
        Self::Deny {
            redirect_to: role.home_path(),
        }
    }
}

/// Decides whether a principal may access a route requiring the given
/// roles.
///
/// Rules:
/// - no authenticated principal: deny to login, whatever the roles;
/// - empty `required_roles`: any authenticated principal is allowed;
/// - otherwise the principal's role must be in the set, else deny to the
///   principal's role home.
#[must_use]
pub fn evaluate(principal: Option<&Principal>, required_roles: &[Role]) -> AccessDecision {
    let Some(principal) = principal.filter(|p| p.is_authenticated()) else {
        return AccessDecision::deny_to_login();
    };
    if required_roles.is_empty() || required_roles.contains(&principal.role) {
        AccessDecision::Allow
    } else {
        AccessDecision::deny_to_home(principal.role)
    }
}

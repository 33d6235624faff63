//! Session-aware route guard.

use std::sync::Arc;

use tracing::debug;

use crate::authz::evaluate::{AccessDecision, evaluate};
use crate::authz::policy::{RouteAccess, RouteAccessPolicy};
use crate::session::store::SessionStore;

/// Gates navigation by combining the session store with the route policy.
///
/// The guard decides; the UI shell performs the actual navigation.
pub struct RouteGuard {
    store: Arc<SessionStore>,
    policy: RouteAccessPolicy,
}

impl RouteGuard {
    /// Creates a guard over the given store and policy.
    #[must_use]
    pub const fn new(store: Arc<SessionStore>, policy: RouteAccessPolicy) -> Self {
        Self { store, policy }
    }

    /// Decides whether the current principal may navigate to `path`.
    ///
    /// Public routes are always allowed; unknown paths redirect to login,
    /// like the original catch-all route.
    #[must_use]
    pub fn check(&self, path: &str) -> AccessDecision {
        let decision = match self.policy.lookup(path) {
            RouteAccess::Public => AccessDecision::Allow,
            RouteAccess::Unknown => AccessDecision::deny_to_login(),
            RouteAccess::Restricted(roles) => {
                evaluate(self.store.current_principal().as_ref(), roles)
            }
        };
        if let AccessDecision::Deny { redirect_to } = decision {
            debug!(path, redirect_to, "navigation denied");
        }
        decision
    }
}

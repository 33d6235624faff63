//! Role-based authorization for navigation and actions.
//!
//! # Modules
//!
//! - `evaluate` - Pure allow/deny decision function
//! - `policy` - Route-to-roles mapping defined at startup
//! - `guard` - Session-aware navigation gate composing the two

pub mod evaluate;
pub mod guard;
pub mod policy;

#[cfg(test)]
mod evaluate_props;

pub use evaluate::{AccessDecision, evaluate};
pub use guard::RouteGuard;
pub use policy::{RouteAccess, RouteAccessPolicy};

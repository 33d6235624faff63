//! Core front-end logic for Atlas Bank.
//!
//! This crate contains the logic boundary of the banking front-end with
//! ZERO HTTP dependencies. Network access happens behind the traits defined
//! here and implemented by the `atlas-client` crate.
//!
//! # Modules
//!
//! - `session` - Observable session store with external persistence
//! - `authz` - Role-based authorization evaluator and route guard
//! - `workflow` - Operation lifecycle: creation, justification gate, approval
//! - `view` - Generation tokens for discarding stale responses

pub mod authz;
pub mod session;
pub mod view;
pub mod workflow;

//! Shared types, errors, and configuration for Atlas Bank.
//!
//! This crate provides common types used across all other crates:
//! - Roles and the authenticated principal
//! - Auth request/response payloads
//! - Pagination types for list endpoints
//! - User administration payloads
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult};
pub use types::principal::{AuthSession, Credentials, Principal, Registration};
pub use types::role::Role;

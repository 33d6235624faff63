//! HTTP repository facade over the Atlas Bank backend API.
//!
//! Implements the boundary traits defined in `atlas-core` with `reqwest`,
//! and normalizes the backend's inconsistent list shapes into `Page<T>`
//! before anything else sees them.
//!
//! # Modules
//!
//! - `http` - The client itself: base URL, bearer token, error mapping
//! - `auth` - Login and registration endpoints
//! - `operations` - Operation repository implementation
//! - `accounts` - Account balance endpoint
//! - `users` - Admin user management endpoints
//! - `dashboard` - Concurrent dashboard load with partial-failure reporting

pub mod accounts;
pub mod auth;
pub mod dashboard;
pub mod http;
pub mod operations;
pub mod users;

pub use accounts::AccountInfo;
pub use dashboard::{DashboardLoader, DashboardSource, DashboardView};
pub use http::ApiClient;

//! Common domain types shared across crates.

pub mod pagination;
pub mod principal;
pub mod role;
pub mod user;

pub use pagination::{Page, PageRequest};
pub use principal::{AuthSession, Credentials, Principal, Registration};
pub use role::Role;
pub use user::{UpdateUserRequest, User, UserStatus};

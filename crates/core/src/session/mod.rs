//! Session state for the banking front-end.
//!
//! The session store is the single source of truth for "who is logged in":
//! one writer path (login/register/logout), many readers (route guard,
//! header, dashboards) through a watch subscription. Durable persistence
//! sits behind [`SessionPersistence`] so the store itself stays free of
//! filesystem and HTTP concerns.

pub mod persist;
pub mod store;

pub use persist::{
    FilePersistence, MemoryPersistence, NoPersistence, PersistedSession, SessionPersistence,
};
pub use store::{AuthGateway, SessionStore, TokenProvider};

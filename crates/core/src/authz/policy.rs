//! Route access policy.
//!
//! Maps navigable paths to the roles permitted on them. Defined once at
//! startup, consulted on every navigation attempt; never persisted.

use atlas_shared::Role;

/// Access requirement of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess<'a> {
    /// No authentication required (login, register).
    Public,
    /// Authenticated principal with one of these roles; an empty slice
    /// means any authenticated principal.
    Restricted(&'a [Role]),
    /// Path not in the table.
    Unknown,
}

/// Startup-defined mapping from path prefixes to permitted roles.
#[derive(Debug, Default)]
pub struct RouteAccessPolicy {
    public: Vec<String>,
    restricted: Vec<(String, Vec<Role>)>,
}

impl RouteAccessPolicy {
    /// Creates an empty policy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            public: Vec::new(),
            restricted: Vec::new(),
        }
    }

    /// The application's route table: `/login` and `/register` public,
    /// one restricted subtree per role.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .public_route("/login")
            .public_route("/register")
            .route("/client", &[Role::Client])
            .route("/agent", &[Role::Agent])
            .route("/admin", &[Role::Admin])
    }

    /// Adds a public route prefix.
    #[must_use]
    pub fn public_route(mut self, prefix: &str) -> Self {
        self.public.push(prefix.to_string());
        self
    }

    /// Adds a restricted route prefix with its permitted roles.
    #[must_use]
    pub fn route(mut self, prefix: &str, roles: &[Role]) -> Self {
        self.restricted.push((prefix.to_string(), roles.to_vec()));
        self
    }

    /// Looks up the access requirement for a path.
    ///
    /// Matching is prefix-based on whole segments, so `/client/deposit`
    /// matches `/client` but `/clientele` does not.
    #[must_use]
    pub fn lookup(&self, path: &str) -> RouteAccess<'_> {
        if self.public.iter().any(|p| Self::matches(p, path)) {
            return RouteAccess::Public;
        }
        self.restricted
            .iter()
            .find(|(p, _)| Self::matches(p, path))
            .map_or(RouteAccess::Unknown, |(_, roles)| {
                RouteAccess::Restricted(roles)
            })
    }

    fn matches(prefix: &str, path: &str) -> bool {
        path == prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

//! Observable session store.

use tokio::sync::watch;
use tracing::{info, warn};

use atlas_shared::{ApiError, ApiResult, AuthSession, Credentials, Principal, Registration};

use crate::session::persist::{PersistedSession, SessionPersistence};

/// Boundary to the authentication endpoints of the backend.
///
/// Implemented by the HTTP facade; the store never talks HTTP itself.
pub trait AuthGateway {
    /// Exchanges credentials for an authenticated session.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = ApiResult<AuthSession>> + Send;

    /// Creates a new account and returns its authenticated session.
    fn register(
        &self,
        details: &Registration,
    ) -> impl Future<Output = ApiResult<AuthSession>> + Send;
}

/// Read access to the current bearer token.
///
/// Implemented by [`SessionStore`]; consumed by the HTTP facade when
/// attaching the `Authorization` header.
pub trait TokenProvider: Send + Sync {
    /// Returns the current bearer token, if authenticated.
    fn bearer_token(&self) -> Option<String>;
}

/// Single source of truth for the authenticated principal.
///
/// One writer path (login/register/logout), any number of observers via
/// [`SessionStore::subscribe`]. On construction the store rehydrates from
/// persisted storage; a missing or corrupt record means "no session".
pub struct SessionStore {
    current: watch::Sender<Option<Principal>>,
    persistence: Box<dyn SessionPersistence>,
}

impl SessionStore {
    /// Creates the store, rehydrating any persisted session.
    #[must_use]
    pub fn new(persistence: Box<dyn SessionPersistence>) -> Self {
        let restored = persistence
            .load()
            .map(|record| record.principal)
            .filter(Principal::is_authenticated);
        if let Some(principal) = &restored {
            info!(email = %principal.email, role = %principal.role, "session restored");
        }
        Self {
            current: watch::Sender::new(restored),
            persistence,
        }
    }

    /// Exchanges credentials for a principal, persists it and publishes it.
    ///
    /// # Errors
    /// Propagates the gateway's [`ApiError`]; a 401 is "bad credentials",
    /// an [`ApiError::Unavailable`] is "backend unreachable". No retry is
    /// attempted.
    pub async fn login(
        &self,
        gateway: &impl AuthGateway,
        credentials: &Credentials,
    ) -> ApiResult<Principal> {
        let session = gateway.login(credentials).await?;
        self.install(session)
    }

    /// Registers a new account; same contract as login.
    ///
    /// # Errors
    /// A backend conflict (HTTP 400/409) surfaces as
    /// [`ApiError::DuplicateAccount`].
    pub async fn register(
        &self,
        gateway: &impl AuthGateway,
        details: &Registration,
    ) -> ApiResult<Principal> {
        let session = gateway.register(details).await.map_err(|err| match err {
            ApiError::Remote { status, message } if status == 400 || status == 409 => {
                ApiError::DuplicateAccount(message)
            }
            other => other,
        })?;
        self.install(session)
    }

    /// Clears persisted state and publishes "no principal". Never fails.
    pub fn logout(&self) {
        self.persistence.clear();
        self.current.send_replace(None);
        info!("session cleared");
    }

    /// Synchronous read of the latest published principal.
    #[must_use]
    pub fn current_principal(&self) -> Option<Principal> {
        self.current.borrow().clone()
    }

    /// Returns true iff a non-empty token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current
            .borrow()
            .as_ref()
            .is_some_and(Principal::is_authenticated)
    }

    /// Subscribes to principal changes.
    ///
    /// The receiver immediately sees the current value and is notified on
    /// every login/logout.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Principal>> {
        self.current.subscribe()
    }

    fn install(&self, session: AuthSession) -> ApiResult<Principal> {
        if session.access_token.is_empty() {
            warn!("auth response carried no token, session not established");
            return Err(ApiError::Authentication(
                "authentication response carried no token".to_string(),
            ));
        }
        let principal = Principal::from(session);
        self.persistence.save(&PersistedSession {
            token: principal.token.clone(),
            principal: principal.clone(),
        });
        self.current.send_replace(Some(principal.clone()));
        info!(email = %principal.email, role = %principal.role, "session established");
        Ok(principal)
    }
}

impl TokenProvider for SessionStore {
    fn bearer_token(&self) -> Option<String> {
        self.current
            .borrow()
            .as_ref()
            .filter(|principal| principal.is_authenticated())
            .map(|principal| principal.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::persist::MemoryPersistence;
    use atlas_shared::Role;

    struct StubGateway {
        login_result: ApiResult<AuthSession>,
        register_result: ApiResult<AuthSession>,
    }

    impl StubGateway {
        fn logging_in(result: ApiResult<AuthSession>) -> Self {
            Self {
                login_result: result,
                register_result: Err(ApiError::Unavailable("unused".into())),
            }
        }

        fn registering(result: ApiResult<AuthSession>) -> Self {
            Self {
                login_result: Err(ApiError::Unavailable("unused".into())),
                register_result: result,
            }
        }
    }

    impl AuthGateway for StubGateway {
        async fn login(&self, _credentials: &Credentials) -> ApiResult<AuthSession> {
            self.login_result.clone()
        }

        async fn register(&self, _details: &Registration) -> ApiResult<AuthSession> {
            self.register_result.clone()
        }
    }

    fn agent_session() -> AuthSession {
        AuthSession {
            access_token: "tok-7".into(),
            email: "a@b.com".into(),
            full_name: "Agent Seven".into(),
            role: Role::Agent,
            account_number: None,
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "a@b.com".into(),
            password: "secret1".into(),
        }
    }

    fn store() -> SessionStore {
        SessionStore::new(Box::new(MemoryPersistence::default()))
    }

    #[tokio::test]
    async fn test_login_publishes_and_persists() {
        let store = store();
        let mut observer = store.subscribe();
        assert!(observer.borrow().is_none());

        let gateway = StubGateway::logging_in(Ok(agent_session()));
        let principal = store.login(&gateway, &credentials()).await.unwrap();

        assert_eq!(principal.role, Role::Agent);
        assert!(store.is_authenticated());
        assert_eq!(store.bearer_token().as_deref(), Some("tok-7"));
        assert!(observer.has_changed().unwrap());
        assert_eq!(
            observer.borrow_and_update().as_ref().map(|p| p.email.clone()),
            Some("a@b.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_login_leaves_no_session() {
        let store = store();
        let gateway = StubGateway::logging_in(Err(ApiError::Authentication("401".into())));

        let result = store.login(&gateway, &credentials()).await;
        assert!(matches!(result, Err(ApiError::Authentication(_))));
        assert!(!store.is_authenticated());
        assert!(store.current_principal().is_none());
        assert!(store.bearer_token().is_none());
    }

    #[tokio::test]
    async fn test_empty_token_response_is_rejected() {
        let store = store();
        let mut session = agent_session();
        session.access_token = String::new();
        let gateway = StubGateway::logging_in(Ok(session));

        let result = store.login(&gateway, &credentials()).await;
        assert!(matches!(result, Err(ApiError::Authentication(_))));
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_maps_conflict_to_duplicate_account() {
        let store = store();
        let gateway = StubGateway::registering(Err(ApiError::Remote {
            status: 400,
            message: "email taken".into(),
        }));

        let details = Registration {
            full_name: "Amina B".into(),
            email: "a@b.com".into(),
            password: "secret1".into(),
        };
        let result = store.register(&gateway, &details).await;
        assert!(matches!(result, Err(ApiError::DuplicateAccount(_))));
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let store = store();
        let gateway = StubGateway::logging_in(Ok(agent_session()));
        store.login(&gateway, &credentials()).await.unwrap();

        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.current_principal().is_none());
        assert!(store.bearer_token().is_none());
    }

    #[tokio::test]
    async fn test_rehydrates_from_persistence() {
        let persistence = MemoryPersistence::default();
        let first = SessionStore::new(Box::new(MemoryPersistence::default()));
        let gateway = StubGateway::logging_in(Ok(agent_session()));
        let principal = first.login(&gateway, &credentials()).await.unwrap();
        persistence.save(&PersistedSession {
            token: principal.token.clone(),
            principal,
        });

        let second = SessionStore::new(Box::new(persistence));
        assert!(second.is_authenticated());
        assert_eq!(
            second.current_principal().map(|p| p.email),
            Some("a@b.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_persisted_empty_token_is_no_session() {
        let persistence = MemoryPersistence::default();
        persistence.save(&PersistedSession {
            token: String::new(),
            principal: Principal {
                email: "a@b.com".into(),
                display_name: "Amina B".into(),
                role: Role::Client,
                account_number: None,
                token: String::new(),
            },
        });

        let store = SessionStore::new(Box::new(persistence));
        assert!(!store.is_authenticated());
        assert!(store.current_principal().is_none());
    }
}

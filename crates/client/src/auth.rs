//! Authentication endpoints.

use reqwest::Method;

use atlas_core::session::AuthGateway;
use atlas_shared::{ApiResult, AuthSession, Credentials, Registration};

use crate::http::ApiClient;

/// `POST /auth/login` and `POST /auth/register`.
///
/// Conflict mapping on register (400/409 to `DuplicateAccount`) happens in
/// the session store, which owns that contract.
impl AuthGateway for ApiClient {
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthSession> {
        self.send_json(self.request(Method::POST, "/auth/login").json(credentials))
            .await
    }

    async fn register(&self, details: &Registration) -> ApiResult<AuthSession> {
        self.send_json(self.request(Method::POST, "/auth/register").json(details))
            .await
    }
}

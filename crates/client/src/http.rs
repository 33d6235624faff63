//! The HTTP client behind every facade module.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use atlas_core::session::TokenProvider;
use atlas_shared::config::ApiConfig;
use atlas_shared::{ApiError, ApiResult};

/// Client for the remote banking API.
///
/// Holds the base URL and a [`TokenProvider`] (the session store) so every
/// request after login carries the bearer token. No timeout is configured
/// at this layer; failures surface only on network error or non-2xx.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Creates a client for the configured API.
    #[must_use]
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    /// Builds a request for `path` (relative to the base URL), attaching
    /// the bearer token when one is available.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "api request");
        let builder = self.http.request(method, url);
        match self.tokens.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request and deserializes a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> ApiResult<T> {
        let response = self.send(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Unavailable(format!("invalid response body: {err}")))
    }

    /// Sends a request and discards any body.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> ApiResult<()> {
        self.send(builder).await.map(|_| ())
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await.map_err(map_transport_error)?;
        check_status(response).await
    }
}

/// No response at all: network failure, refused connection, DNS.
fn map_transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Unavailable(err.to_string())
}

/// Classifies a non-2xx response, deriving the message from the body's
/// `message` field when present.
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = extract_message(&body).unwrap_or_else(|| fallback_message(status));
    Err(ApiError::from_status(status.as_u16(), message))
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn fallback_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

//! Account endpoints.

use reqwest::Method;
use rust_decimal::Decimal;
use serde::Deserialize;

use atlas_shared::ApiResult;

use crate::http::ApiClient;

/// Account summary returned by `GET /client/accounts`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    /// Account number.
    #[serde(default)]
    pub account_number: Option<String>,
    /// Current balance.
    pub balance: Decimal,
    /// Currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "DH".to_string()
}

impl ApiClient {
    /// `GET /client/accounts`.
    pub async fn account_info(&self) -> ApiResult<AccountInfo> {
        self.send_json(self.request(Method::GET, "/client/accounts"))
            .await
    }
}

//! Concurrent dashboard load.
//!
//! The client dashboard needs the account balance and the recent
//! operations. The two reads are independent: they are issued
//! concurrently, joined when both complete, and a failure of one never
//! discards the other's result. A stale load (the user navigated away and
//! back, or away entirely) is dropped via [`ViewGeneration`].

use tracing::warn;

use atlas_core::view::ViewGeneration;
use atlas_core::workflow::repository::OperationRepository;
use atlas_core::workflow::types::Operation;
use atlas_shared::types::pagination::{Page, PageRequest};
use atlas_shared::{ApiError, ApiResult};

use crate::accounts::AccountInfo;
use crate::http::ApiClient;

/// Source of the dashboard's two independent reads.
pub trait DashboardSource {
    /// Fetches the account summary.
    fn balance(&self) -> impl Future<Output = ApiResult<AccountInfo>> + Send;

    /// Fetches the most recent operations.
    fn recent_operations(
        &self,
        page: PageRequest,
    ) -> impl Future<Output = ApiResult<Page<Operation>>> + Send;
}

impl DashboardSource for ApiClient {
    async fn balance(&self) -> ApiResult<AccountInfo> {
        self.account_info().await
    }

    async fn recent_operations(&self, page: PageRequest) -> ApiResult<Page<Operation>> {
        self.list_own(page).await
    }
}

/// What the dashboard has to show after a load.
///
/// Partial data is normal: each leg is present iff its read succeeded,
/// and the failures are reported alongside.
#[derive(Debug)]
pub struct DashboardView {
    /// Account summary, if the balance read succeeded.
    pub balance: Option<AccountInfo>,
    /// Recent operations, if the list read succeeded.
    pub recent_operations: Option<Page<Operation>>,
    /// Errors of the legs that failed, in read order.
    pub errors: Vec<ApiError>,
}

/// Loader owning the view's generation counter.
#[derive(Debug, Default)]
pub struct DashboardLoader {
    generation: ViewGeneration,
}

impl DashboardLoader {
    /// Creates a loader.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: ViewGeneration::new(),
        }
    }

    /// Invalidates any in-flight load, e.g. when the view unmounts.
    pub fn invalidate(&self) {
        self.generation.begin();
    }

    /// Loads the dashboard data concurrently.
    ///
    /// Returns `None` when the load went stale before completing; the
    /// caller must not render anything from it.
    pub async fn load(
        &self,
        source: &impl DashboardSource,
        page: PageRequest,
    ) -> Option<DashboardView> {
        let generation = self.generation.begin();
        let (balance, recent) = tokio::join!(source.balance(), source.recent_operations(page));
        if !self.generation.is_current(generation) {
            warn!(generation, "discarding stale dashboard response");
            return None;
        }

        let mut errors = Vec::new();
        let balance = match balance {
            Ok(info) => Some(info),
            Err(err) => {
                errors.push(err);
                None
            }
        };
        let recent_operations = match recent {
            Ok(page) => Some(page),
            Err(err) => {
                errors.push(err);
                None
            }
        };
        Some(DashboardView {
            balance,
            recent_operations,
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use super::*;

    struct StubSource {
        balance: ApiResult<AccountInfo>,
        operations: ApiResult<Page<Operation>>,
    }

    impl StubSource {
        fn healthy() -> Self {
            Self {
                balance: Ok(AccountInfo {
                    account_number: Some("ACC-1".to_string()),
                    balance: dec!(1200),
                    currency: "DH".to_string(),
                }),
                operations: Ok(Page::from_full_list(Vec::new(), PageRequest::default())),
            }
        }
    }

    impl DashboardSource for StubSource {
        async fn balance(&self) -> ApiResult<AccountInfo> {
            self.balance.clone()
        }

        async fn recent_operations(&self, _page: PageRequest) -> ApiResult<Page<Operation>> {
            self.operations.clone()
        }
    }

    /// Invalidates the loader while the load is in flight, as a
    /// navigation away from the view would.
    struct InvalidatingSource {
        inner: StubSource,
        loader: Arc<DashboardLoader>,
    }

    impl DashboardSource for InvalidatingSource {
        async fn balance(&self) -> ApiResult<AccountInfo> {
            self.loader.invalidate();
            self.inner.balance.clone()
        }

        async fn recent_operations(&self, page: PageRequest) -> ApiResult<Page<Operation>> {
            self.inner.recent_operations(page).await
        }
    }

    #[tokio::test]
    async fn test_both_legs_succeed() {
        let loader = DashboardLoader::new();
        let view = loader
            .load(&StubSource::healthy(), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(view.balance.unwrap().balance, dec!(1200));
        assert!(view.recent_operations.unwrap().is_empty());
        assert!(view.errors.is_empty());
    }

    #[tokio::test]
    async fn test_one_failed_leg_keeps_the_other() {
        let mut source = StubSource::healthy();
        source.operations = Err(ApiError::Unavailable("down".to_string()));

        let loader = DashboardLoader::new();
        let view = loader.load(&source, PageRequest::default()).await.unwrap();
        assert!(view.balance.is_some());
        assert!(view.recent_operations.is_none());
        assert_eq!(view.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_stale_load_is_discarded() {
        let loader = Arc::new(DashboardLoader::new());
        let source = InvalidatingSource {
            inner: StubSource::healthy(),
            loader: Arc::clone(&loader),
        };
        assert!(loader.load(&source, PageRequest::default()).await.is_none());
    }
}

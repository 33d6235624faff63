//! Atlas Bank console
//!
//! Signs in with the credentials from the environment, checks what the
//! session may navigate to, and prints a role-appropriate summary.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atlas_client::{ApiClient, DashboardLoader};
use atlas_core::authz::{AccessDecision, RouteAccessPolicy, RouteGuard};
use atlas_core::session::{FilePersistence, SessionStore, TokenProvider};
use atlas_core::workflow::{OperationRepository, WorkflowEngine};
use atlas_shared::types::pagination::PageRequest;
use atlas_shared::{AppConfig, Credentials, Role};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atlas=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    let store = Arc::new(SessionStore::new(Box::new(FilePersistence::new(
        config.session.file.clone(),
    ))));
    let client = ApiClient::new(&config.api, Arc::clone(&store) as Arc<dyn TokenProvider>);

    if !store.is_authenticated() {
        let credentials = Credentials {
            email: std::env::var("ATLAS_EMAIL")?,
            password: std::env::var("ATLAS_PASSWORD")?,
        };
        store.login(&client, &credentials).await?;
    }

    let principal = store
        .current_principal()
        .ok_or_else(|| anyhow::anyhow!("no authenticated session"))?;
    info!(email = %principal.email, role = %principal.role, "signed in");

    // Navigate to the role's home route through the guard, like the UI
    // shell would.
    let guard = RouteGuard::new(Arc::clone(&store), RouteAccessPolicy::standard());
    let home = principal.role.home_path();
    match guard.check(home) {
        AccessDecision::Allow => info!(route = home, "navigation allowed"),
        AccessDecision::Deny { redirect_to } => {
            warn!(route = home, redirect_to, "navigation denied");
            return Ok(());
        }
    }

    let page = PageRequest::default();
    match principal.role {
        Role::Client => {
            let loader = DashboardLoader::new();
            if let Some(view) = loader.load(&client, page).await {
                if let Some(account) = view.balance {
                    info!(
                        account = account.account_number.as_deref().unwrap_or("-"),
                        balance = %account.balance,
                        currency = %account.currency,
                        "account summary"
                    );
                }
                if let Some(operations) = view.recent_operations {
                    info!(
                        shown = operations.items.len(),
                        total = operations.total_count,
                        "recent operations"
                    );
                    for operation in &operations.items {
                        info!(
                            id = operation.id.as_str(),
                            kind = %operation.operation_type,
                            amount = %operation.amount,
                            status = %operation.status,
                            "operation"
                        );
                    }
                }
                for error in &view.errors {
                    warn!(error = %error, "dashboard read failed");
                }
            }
        }
        Role::Agent | Role::Admin => {
            let engine = WorkflowEngine::new(client);
            let pending = engine.repository().list_pending(page).await?;
            info!(
                shown = pending.items.len(),
                total = pending.total_count,
                "pending operations"
            );
            for operation in &pending.items {
                info!(
                    id = operation.id.as_str(),
                    kind = %operation.operation_type,
                    amount = %operation.amount,
                    account = %operation.account_number,
                    "awaiting decision"
                );
            }
        }
    }

    Ok(())
}

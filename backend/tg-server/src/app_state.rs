use crate::{ApiError, ApiResult, AuthenticationGate};

use tg_auth::TokenService;
use tg_db::{CredentialStore, DependencyHealth, TaskRepository};

use std::sync::Arc;

/// Shared handles cloned into every request
#[derive(Clone)]
pub struct AppState {
    pub health: DependencyHealth,
    pub tokens: Arc<TokenService>,
    pub credentials: Arc<dyn CredentialStore>,
    pub tasks: Arc<TaskRepository>,
    pub gate: Arc<AuthenticationGate>,
}

impl AppState {
    /// Fail fast with 503 rather than wait on a store that is not connected
    #[track_caller]
    pub fn require_store(&self) -> ApiResult<()> {
        if self.health.is_connected() {
            Ok(())
        } else {
            Err(ApiError::service_unavailable())
        }
    }
}

pub mod api;
pub mod app_state;
pub mod error;
pub mod gate;
pub mod health;
pub mod logger;
pub mod routes;
pub mod shutdown;
pub mod startup;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, signup},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        signup_request::SignupRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{current_user::CurrentUser, valid_json::ValidJson, valid_query::ValidQuery},
    middleware::{authenticated_user::AuthenticatedUser, require_auth::require_auth},
    profile::{
        profile::{delete_profile, get_profile, update_profile},
        profile_response::ProfileResponse,
        update_profile_request::UpdateProfileRequest,
        user_dto::UserDto,
    },
    tasks::{
        create_task_request::CreateTaskRequest,
        list_tasks_query::ListTasksQuery,
        task_dto::TaskDto,
        task_list_response::TaskListResponse,
        task_response::TaskResponse,
        tasks::{create_task, delete_task, get_task, list_tasks, update_task},
        update_task_request::UpdateTaskRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use gate::{
    auth_outcome::AuthOutcome,
    authentication_gate::AuthenticationGate,
    gate_error::{GateError, Result as GateResult},
};
pub use shutdown::{shutdown_coordinator::ShutdownCoordinator, shutdown_guard::ShutdownGuard};
pub use startup::StoreStartup;

pub use crate::routes::build_router;

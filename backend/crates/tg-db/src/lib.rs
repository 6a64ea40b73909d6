pub mod connection;
pub mod credential_store;
pub mod error;
pub mod health;
pub mod repositories;

pub use connection::store_connector::StoreConnector;
pub use connection::store_settings::StoreSettings;
pub use connection::{create_lazy_pool, run_migrations};
pub use credential_store::{CredentialStore, SqlCredentialStore};
pub use error::{DbError, Result};
pub use health::{DependencyHealth, DependencyHealthState};
pub use repositories::task_repository::TaskRepository;

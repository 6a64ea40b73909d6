use tg_auth::PasswordHasher;
use tg_db::{SqlCredentialStore, TaskRepository, run_migrations};

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Minimum bcrypt cost; keeps hashing fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

pub const TEST_OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn credential_store(pool: &SqlitePool) -> SqlCredentialStore {
    let hasher = PasswordHasher::new(TEST_BCRYPT_COST).expect("Failed to build hasher");
    SqlCredentialStore::new(pool.clone(), hasher, TEST_OPERATION_TIMEOUT)
}

pub fn task_repository(pool: &SqlitePool) -> TaskRepository {
    TaskRepository::new(pool.clone(), TEST_OPERATION_TIMEOUT)
}

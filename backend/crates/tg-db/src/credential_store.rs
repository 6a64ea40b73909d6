//! Persistence of user records and the password verification primitive.

use crate::connection::bounded;
use crate::{DbError, Result as DbErrorResult};

use tg_auth::PasswordHasher;
use tg_core::{NewUser, PasswordHash, ProfileUpdate, User};

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Store of user identities.
///
/// Email uniqueness is enforced by the store itself; a conflicting
/// `create` or `update_profile` fails with `DbError::UniqueViolation`.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>>;

    /// Hash the secret and insert a new user
    async fn create(&self, new_user: NewUser) -> DbErrorResult<User>;

    /// Constant-time check of `candidate` against the user's stored hash
    async fn verify_secret(&self, user: &User, candidate: &str) -> DbErrorResult<bool>;

    /// `None` when the user no longer exists
    async fn update_profile(&self, id: Uuid, update: ProfileUpdate)
    -> DbErrorResult<Option<User>>;

    /// Delete the user and, by cascade, their tasks. False if absent.
    async fn delete(&self, id: Uuid) -> DbErrorResult<bool>;
}

pub struct SqlCredentialStore {
    pool: SqlitePool,
    hasher: PasswordHasher,
    operation_timeout: Duration,
}

const USER_COLUMNS: &str = "id, email, password_hash, name, bio, created_at, updated_at";

impl SqlCredentialStore {
    pub fn new(pool: SqlitePool, hasher: PasswordHasher, operation_timeout: Duration) -> Self {
        Self {
            pool,
            hasher,
            operation_timeout,
        }
    }

    async fn fetch_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }
}

#[async_trait]
impl CredentialStore for SqlCredentialStore {
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        bounded(self.operation_timeout, "find_user_by_email", async {
            let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

            row.as_ref().map(user_from_row).transpose()
        })
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        bounded(
            self.operation_timeout,
            "find_user_by_id",
            self.fetch_by_id(id),
        )
        .await
    }

    async fn create(&self, new_user: NewUser) -> DbErrorResult<User> {
        let password_hash = self.hasher.hash(&new_user.secret).await?;
        let user = User::new(new_user.email, password_hash, new_user.name);

        bounded(self.operation_timeout, "create_user", async {
            sqlx::query(
                r#"
                    INSERT INTO users (id, email, password_hash, name, bio, created_at, updated_at)
                    VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(user.password_hash.as_str())
            .bind(&user.name)
            .bind(&user.bio)
            .bind(user.created_at.timestamp())
            .bind(user.updated_at.timestamp())
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::from_write(e, "email"))?;

            Ok(())
        })
        .await?;

        Ok(user)
    }

    async fn verify_secret(&self, user: &User, candidate: &str) -> DbErrorResult<bool> {
        Ok(self.hasher.verify(candidate, &user.password_hash).await?)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: ProfileUpdate,
    ) -> DbErrorResult<Option<User>> {
        bounded(self.operation_timeout, "update_profile", async {
            let mut tx = self.pool.begin().await?;

            let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
                .bind(id.to_string())
                .fetch_optional(&mut *tx)
                .await?;

            let Some(mut user) = row.as_ref().map(user_from_row).transpose()? else {
                return Ok(None);
            };

            if update.is_empty() {
                return Ok(Some(user));
            }

            user.apply(update);

            sqlx::query(
                r#"
                    UPDATE users
                    SET email = ?, name = ?, bio = ?, updated_at = ?
                    WHERE id = ?
                "#,
            )
            .bind(&user.email)
            .bind(&user.name)
            .bind(&user.bio)
            .bind(user.updated_at.timestamp())
            .bind(user.id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::from_write(e, "email"))?;

            tx.commit().await?;

            Ok(Some(user))
        })
        .await
    }

    async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        bounded(self.operation_timeout, "delete_user", async {
            let result = sqlx::query("DELETE FROM users WHERE id = ?")
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;

            Ok(result.rows_affected() > 0)
        })
        .await
    }
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;

    Ok(User {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::corrupt(format!("Invalid UUID in users.id: {}", e)))?,
        email: row.try_get("email")?,
        password_hash: PasswordHash::new(row.try_get::<String, _>("password_hash")?),
        name: row.try_get("name")?,
        bio: row.try_get("bio")?,
        created_at: timestamp(row.try_get("created_at")?, "users.created_at")?,
        updated_at: timestamp(row.try_get("updated_at")?, "users.updated_at")?,
    })
}

pub(crate) fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::corrupt(format!("Invalid timestamp in {}", column)))
}

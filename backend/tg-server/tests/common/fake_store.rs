use tg_auth::PasswordHasher;
use tg_core::{ErrorLocation, NewUser, ProfileUpdate, User};
use tg_db::{CredentialStore, DbError, Result as DbErrorResult};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

/// In-memory credential store that counts every call
pub struct FakeCredentialStore {
    users: Mutex<HashMap<Uuid, User>>,
    hasher: PasswordHasher,
    calls: AtomicUsize,
    /// Email lookups miss even for registered emails, as if a concurrent
    /// signup committed right after the lookup
    stale_lookups: AtomicBool,
    /// Every operation times out
    timing_out: AtomicBool,
}

impl FakeCredentialStore {
    pub fn new(hasher: PasswordHasher) -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            hasher,
            calls: AtomicUsize::new(0),
            stale_lookups: AtomicBool::new(false),
            timing_out: AtomicBool::new(false),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_stale_lookups(&self, stale: bool) {
        self.stale_lookups.store(stale, Ordering::SeqCst);
    }

    pub fn set_timing_out(&self, timing_out: bool) {
        self.timing_out.store(timing_out, Ordering::SeqCst);
    }

    #[track_caller]
    fn enter(&self, operation: &'static str) -> DbErrorResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.timing_out.load(Ordering::SeqCst) {
            return Err(DbError::Timeout {
                operation,
                secs: 45,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FakeCredentialStore {
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        self.enter("find_user_by_email")?;
        if self.stale_lookups.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        self.enter("find_user_by_id")?;
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> DbErrorResult<User> {
        self.enter("create_user")?;
        let hash = self.hasher.hash(&new_user.secret).await?;

        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == new_user.email) {
            return Err(DbError::UniqueViolation {
                field: "email",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let user = User::new(new_user.email, hash, new_user.name);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn verify_secret(&self, user: &User, candidate: &str) -> DbErrorResult<bool> {
        self.enter("verify_secret")?;
        Ok(self.hasher.verify(candidate, &user.password_hash).await?)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: ProfileUpdate,
    ) -> DbErrorResult<Option<User>> {
        self.enter("update_profile")?;
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.get_mut(&id) else {
            return Ok(None);
        };
        user.apply(update);
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        self.enter("delete_user")?;
        Ok(self.users.lock().unwrap().remove(&id).is_some())
    }
}

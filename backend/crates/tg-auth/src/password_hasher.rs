//! bcrypt password hashing.
//!
//! bcrypt is CPU-bound; every call runs on the blocking thread pool so
//! request tasks never stall the async workers.

use crate::{AuthError, Result as AuthErrorResult};

use tg_core::PasswordHash;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use tokio::task;

const DUMMY_SECRET: &str = "taskgate-timing-equalizer";

#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    /// Hash compared against when no user matches, so lookups that miss
    /// take as long as lookups that hit
    dummy: Arc<PasswordHash>,
}

impl PasswordHasher {
    #[track_caller]
    pub fn new(cost: u32) -> AuthErrorResult<Self> {
        let dummy = hash_blocking(DUMMY_SECRET, cost)?;
        Ok(Self {
            cost,
            dummy: Arc::new(dummy),
        })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, secret: &str) -> AuthErrorResult<PasswordHash> {
        let secret = secret.to_owned();
        let cost = self.cost;
        run_blocking(move || hash_blocking(&secret, cost)).await
    }

    /// Constant-time comparison of `secret` against `hash`
    pub async fn verify(&self, secret: &str, hash: &PasswordHash) -> AuthErrorResult<bool> {
        let secret = secret.to_owned();
        let hash = hash.clone();
        run_blocking(move || verify_blocking(&secret, &hash)).await
    }

    /// Burn one verification against the dummy hash. Always false.
    pub async fn verify_dummy(&self, secret: &str) -> AuthErrorResult<bool> {
        let secret = secret.to_owned();
        let dummy = Arc::clone(&self.dummy);
        run_blocking(move || verify_blocking(&secret, &dummy).map(|_| false)).await
    }
}

#[track_caller]
fn hash_blocking(secret: &str, cost: u32) -> AuthErrorResult<PasswordHash> {
    bcrypt::hash(secret, cost)
        .map(PasswordHash::new)
        .map_err(|e| AuthError::PasswordHash {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
fn verify_blocking(secret: &str, hash: &PasswordHash) -> AuthErrorResult<bool> {
    bcrypt::verify(secret, hash.as_str()).map_err(|e| AuthError::PasswordHash {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}

async fn run_blocking<T, F>(f: F) -> AuthErrorResult<T>
where
    F: FnOnce() -> AuthErrorResult<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| AuthError::HashTask {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?
}

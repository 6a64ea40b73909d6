//! Signup and login.
//!
//! Both operations run the same phases: refuse immediately when the
//! credential store is not connected, run the store work, then issue a
//! token for the resulting identity.

use crate::{AuthOutcome, GateError, GateResult};

use tg_auth::{PasswordHasher, TokenService};
use tg_core::{ErrorLocation, NewUser, User};
use tg_db::{CredentialStore, DependencyHealth};

use std::panic::Location;
use std::sync::Arc;

use log::{debug, info, warn};

#[derive(Clone)]
pub struct AuthenticationGate {
    health: DependencyHealth,
    credentials: Arc<dyn CredentialStore>,
    tokens: Arc<TokenService>,
    hasher: PasswordHasher,
}

impl AuthenticationGate {
    pub fn new(
        health: DependencyHealth,
        credentials: Arc<dyn CredentialStore>,
        tokens: Arc<TokenService>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            health,
            credentials,
            tokens,
            hasher,
        }
    }

    /// Register a new identity and issue its first token.
    pub async fn signup(&self, new_user: NewUser) -> GateResult<AuthOutcome> {
        self.ensure_store_connected()?;

        // Early, friendlier rejection; the store's uniqueness constraint
        // still decides races between concurrent signups.
        if self.credentials.find_by_email(&new_user.email).await?.is_some() {
            debug!("Signup rejected: email already registered");
            return Err(GateError::DuplicateEmail {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let user = self.credentials.create(new_user).await?;
        info!("User {} registered", user.id);

        self.issue(user)
    }

    /// Authenticate by email and secret.
    pub async fn login(&self, email: &str, secret: &str) -> GateResult<AuthOutcome> {
        self.ensure_store_connected()?;

        let Some(user) = self.credentials.find_by_email(email).await? else {
            // Spend the same hashing work as a real comparison
            if let Err(e) = self.hasher.verify_dummy(secret).await {
                warn!("Dummy password verification failed: {}", e);
            }
            return Err(GateError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !self.credentials.verify_secret(&user, secret).await? {
            return Err(GateError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!("User {} logged in", user.id);
        self.issue(user)
    }

    #[track_caller]
    fn ensure_store_connected(&self) -> GateResult<()> {
        if self.health.is_connected() {
            return Ok(());
        }

        warn!(
            "Refusing auth request: credential store is {}",
            self.health.current_state()
        );
        Err(GateError::ServiceUnavailable {
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn issue(&self, user: User) -> GateResult<AuthOutcome> {
        let token = self.tokens.issue(user.id)?;
        Ok(AuthOutcome { user, token })
    }
}

//! User entity - the identity that owns tasks and authenticates via tokens.

use crate::PasswordHash;
use crate::models::now;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A registered user.
///
/// `password_hash` is skipped by serde; any serialized form of a user
/// carries only the public profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: Uuid,
    /// Unique, compared exactly as stored
    pub email: String,
    #[serde(skip)]
    pub password_hash: PasswordHash,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id and timestamps
    pub fn new(email: String, password_hash: PasswordHash, name: String) -> Self {
        let now = now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial profile update, bumping `updated_at` when anything changed
    pub fn apply(&mut self, update: ProfileUpdate) {
        let mut changed = false;

        if let Some(name) = update.name {
            self.name = name;
            changed = true;
        }
        if let Some(bio) = update.bio {
            self.bio = bio;
            changed = true;
        }
        if let Some(email) = update.email {
            self.email = email;
            changed = true;
        }

        if changed {
            self.updated_at = now();
        }
    }
}

/// Signup input. The plaintext secret lives only as long as the request.
#[derive(Clone)]
pub struct NewUser {
    pub email: String,
    pub secret: String,
    pub name: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("secret", &"[redacted]")
            .field("name", &self.name)
            .finish()
    }
}

/// Partial profile update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    /// `Some(None)` clears the bio
    pub bio: Option<Option<String>>,
    pub email: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.bio.is_none() && self.email.is_none()
    }
}

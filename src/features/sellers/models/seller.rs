use std::fmt;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a registered seller
#[derive(Clone, FromRow)]
pub struct Seller {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    /// Self-describing one-way hash, `{id}<encoded>`
    #[allow(dead_code)]
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
}

/// Seller ready to be inserted. Built only after validation and hashing.
#[derive(Clone)]
pub struct NewSeller {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub hashed_password: String,
}

impl NewSeller {
    pub fn new(email: String, username: String, hashed_password: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            email,
            username,
            hashed_password,
        }
    }
}

impl fmt::Debug for Seller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seller")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("hashed_password", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl fmt::Debug for NewSeller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewSeller")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("hashed_password", &"<redacted>")
            .finish()
    }
}

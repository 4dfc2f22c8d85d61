use async_trait::async_trait;
use thiserror::Error;

use crate::features::sellers::models::{NewSeller, Seller};

/// PostgreSQL SQLSTATE for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum SaveSellerError {
    /// Email or username already taken. An expected outcome, not a failure.
    #[error("Seller already exists (constraint: {constraint:?})")]
    Conflict { constraint: Option<String> },

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for SaveSellerError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return SaveSellerError::Conflict {
                    constraint: db_err.constraint().map(str::to_string),
                };
            }
        }

        SaveSellerError::Database(e)
    }
}

/// Storage for sellers. Implementations must enforce email and username
/// uniqueness atomically: of two concurrent saves sharing a value, exactly one
/// succeeds and the other returns [`SaveSellerError::Conflict`].
#[async_trait]
pub trait SellerRepository: Send + Sync {
    async fn save(&self, seller: NewSeller) -> Result<Seller, SaveSellerError>;

    /// All stored sellers. Used by verification tooling, not by the sign-up flow.
    #[allow(dead_code)]
    async fn find_all(&self) -> Result<Vec<Seller>, sqlx::Error>;
}

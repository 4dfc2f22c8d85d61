//! Credential hashing.
//!
//! One-way, salted password hashing behind the [`PasswordHasher`] trait. New
//! hashes are produced through [`DelegatingPasswordHasher`], which prefixes the
//! encoded hash with the encoder id (`{bcrypt}$2b$12$...`) so that hashes made
//! by an older default encoder stay verifiable after the default changes.

mod argon2_hasher;
mod bcrypt_hasher;
mod delegating_hasher;

use thiserror::Error;

pub use argon2_hasher::Argon2PasswordHasher;
pub use bcrypt_hasher::BcryptPasswordHasher;
pub use delegating_hasher::DelegatingPasswordHasher;

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("hash error: {0}")]
    Hash(String),

    #[error("unknown password encoder: {0}")]
    UnknownEncoder(String),
}

impl PasswordHashError {
    pub fn hash_error(message: impl Into<String>) -> Self {
        Self::Hash(message.into())
    }
}

/// One-way hash and verify capability.
///
/// Implementations are CPU-bound by design; async callers should run them on
/// the blocking pool.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordHashError>;

    /// Returns `false` for a mismatch and for any hash this encoder cannot parse.
    #[allow(dead_code)]
    fn matches(&self, plaintext: &str, hashed: &str) -> bool;
}

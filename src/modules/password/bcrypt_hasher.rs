use bcrypt::{hash, verify, DEFAULT_COST};

use super::{PasswordHashError, PasswordHasher};

#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub const ID: &'static str = "bcrypt";

    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordHashError> {
        hash(plaintext, self.cost).map_err(|e| PasswordHashError::hash_error(e.to_string()))
    }

    fn matches(&self, plaintext: &str, hashed: &str) -> bool {
        verify(plaintext, hashed).unwrap_or(false)
    }
}

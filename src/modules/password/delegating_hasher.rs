use std::collections::HashMap;
use std::sync::Arc;

use super::{Argon2PasswordHasher, BcryptPasswordHasher, PasswordHashError, PasswordHasher};
use crate::core::config::PasswordConfig;

const ID_PREFIX: char = '{';
const ID_SUFFIX: char = '}';

/// Hasher that writes `{id}<encoded>` and verifies by dispatching on `{id}`
pub struct DelegatingPasswordHasher {
    default_id: String,
    encoders: HashMap<String, Arc<dyn PasswordHasher>>,
}

impl DelegatingPasswordHasher {
    pub fn new(default_id: impl Into<String>, default_encoder: Arc<dyn PasswordHasher>) -> Self {
        let default_id = default_id.into();
        let mut encoders = HashMap::new();
        encoders.insert(default_id.clone(), default_encoder);

        Self {
            default_id,
            encoders,
        }
    }

    /// Register an additional encoder that stays available for verification
    pub fn with_encoder(mut self, id: impl Into<String>, encoder: Arc<dyn PasswordHasher>) -> Self {
        self.encoders.entry(id.into()).or_insert(encoder);
        self
    }

    /// Build with every supported encoder registered and the configured one as default
    pub fn from_config(config: &PasswordConfig) -> Result<Self, PasswordHashError> {
        let bcrypt: Arc<dyn PasswordHasher> = Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost));
        let argon2: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);

        let hasher = match config.encoder.as_str() {
            BcryptPasswordHasher::ID => Self::new(BcryptPasswordHasher::ID, bcrypt)
                .with_encoder(Argon2PasswordHasher::ID, argon2),
            Argon2PasswordHasher::ID => Self::new(Argon2PasswordHasher::ID, argon2)
                .with_encoder(BcryptPasswordHasher::ID, bcrypt),
            other => return Err(PasswordHashError::UnknownEncoder(other.to_string())),
        };

        Ok(hasher)
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    /// Split `{id}encoded` into its parts
    #[allow(dead_code)]
    fn split(hashed: &str) -> Option<(&str, &str)> {
        let rest = hashed.strip_prefix(ID_PREFIX)?;
        let end = rest.find(ID_SUFFIX)?;
        Some((&rest[..end], &rest[end + 1..]))
    }
}

impl PasswordHasher for DelegatingPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordHashError> {
        let encoder = self
            .encoders
            .get(&self.default_id)
            .ok_or_else(|| PasswordHashError::UnknownEncoder(self.default_id.clone()))?;

        let encoded = encoder.hash(plaintext)?;
        Ok(format!(
            "{}{}{}{}",
            ID_PREFIX, self.default_id, ID_SUFFIX, encoded
        ))
    }

    fn matches(&self, plaintext: &str, hashed: &str) -> bool {
        let Some((id, encoded)) = Self::split(hashed) else {
            return false;
        };

        match self.encoders.get(id) {
            Some(encoder) => encoder.matches(plaintext, encoded),
            None => {
                tracing::warn!("No password encoder registered for id '{}'", id);
                false
            }
        }
    }
}

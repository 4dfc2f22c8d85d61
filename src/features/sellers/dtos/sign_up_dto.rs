use std::fmt;

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::{EMAIL_REGEX, USERNAME_REGEX};

/// Request DTO for seller registration
///
/// Every field may be null or absent on the wire; a missing field fails validation.
#[derive(Deserialize, Validate, ToSchema)]
pub struct SignUpRequestDto {
    #[validate(required, regex(path = *EMAIL_REGEX, message = "Invalid email format"))]
    #[schema(example = "seller@example.com")]
    pub email: Option<String>,

    #[validate(required, regex(path = *USERNAME_REGEX, message = "Username must be at least 3 characters of letters, digits, '_' or '-'"))]
    #[schema(example = "seller_01")]
    pub username: Option<String>,

    #[validate(required, length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "password", min_length = 8)]
    pub password: Option<String>,
}

impl fmt::Debug for SignUpRequestDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequestDto")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

//! Seller registration: validate, hash, persist.

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::sellers::dtos::SignUpRequestDto;
use crate::features::sellers::models::NewSeller;
use crate::features::sellers::repositories::{SaveSellerError, SellerRepository};
use crate::modules::password::PasswordHasher;

/// Result of a registration attempt that reached a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpOutcome {
    Created(Uuid),
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Malformed or missing field
    Validation,
    /// Email or username already registered
    Conflict,
}

impl From<RejectReason> for AppError {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::Validation => AppError::Validation("Invalid sign-up request".to_string()),
            RejectReason::Conflict => AppError::Conflict("Seller already exists".to_string()),
        }
    }
}

/// Service for seller registration
pub struct SignUpService {
    repository: Arc<dyn SellerRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl SignUpService {
    pub fn new(repository: Arc<dyn SellerRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new seller.
    ///
    /// Validation failures and uniqueness conflicts come back as
    /// `SignUpOutcome::Rejected`; only infrastructure failures are errors.
    pub async fn register(&self, dto: SignUpRequestDto) -> Result<SignUpOutcome> {
        if let Err(errors) = dto.validate() {
            let fields: Vec<_> = errors.field_errors().into_keys().collect();
            tracing::debug!("Seller sign-up rejected by validation: fields={:?}", fields);
            return Ok(SignUpOutcome::Rejected(RejectReason::Validation));
        }

        let SignUpRequestDto {
            email: Some(email),
            username: Some(username),
            password: Some(password),
        } = dto
        else {
            return Ok(SignUpOutcome::Rejected(RejectReason::Validation));
        };

        // The plaintext moves into the blocking task and is dropped there
        let hasher = Arc::clone(&self.hasher);
        let hashed_password = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))??;

        let new_seller = NewSeller::new(email, username, hashed_password);

        match self.repository.save(new_seller).await {
            Ok(seller) => {
                tracing::info!("Seller registered: id={}", seller.id);
                Ok(SignUpOutcome::Created(seller.id))
            }
            Err(SaveSellerError::Conflict { constraint }) => {
                tracing::info!(
                    "Seller sign-up rejected by uniqueness conflict: constraint={}",
                    constraint.as_deref().unwrap_or("-")
                );
                Ok(SignUpOutcome::Rejected(RejectReason::Conflict))
            }
            Err(SaveSellerError::Database(e)) => {
                tracing::error!("Failed to insert seller: {:?}", e);
                Err(AppError::Database(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        sign_up_request, test_password_hasher, unique_email, unique_username,
        FailingSellerRepository, InMemorySellerRepository,
    };
    use futures::future::join_all;

    fn service(repository: Arc<InMemorySellerRepository>) -> SignUpService {
        SignUpService::new(repository, Arc::new(test_password_hasher()))
    }

    #[tokio::test]
    async fn test_register_creates_seller() {
        let repository = Arc::new(InMemorySellerRepository::new());
        let service = service(Arc::clone(&repository));
        let email = unique_email();
        let username = unique_username();

        let outcome = service
            .register(sign_up_request(&email, &username, "password"))
            .await
            .unwrap();

        let sellers = repository.find_all().await.unwrap();
        assert_eq!(sellers.len(), 1);
        assert_eq!(outcome, SignUpOutcome::Created(sellers[0].id));
        assert_eq!(sellers[0].email, email);
        assert_eq!(sellers[0].username, username);
    }

    #[tokio::test]
    async fn test_register_stores_verifiable_hash() {
        let repository = Arc::new(InMemorySellerRepository::new());
        let hasher = Arc::new(test_password_hasher());
        let service = SignUpService::new(repository.clone(), hasher.clone());

        service
            .register(sign_up_request(&unique_email(), &unique_username(), "correct horse"))
            .await
            .unwrap();

        let sellers = repository.find_all().await.unwrap();
        let stored = &sellers[0].hashed_password;
        assert_ne!(stored, "correct horse");
        assert!(stored.starts_with("{bcrypt}"));
        assert!(hasher.matches("correct horse", stored));
        assert!(!hasher.matches("wrong horse", stored));
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected_without_side_effects() {
        let repository = Arc::new(InMemorySellerRepository::new());
        let service = service(Arc::clone(&repository));

        let outcome = service
            .register(sign_up_request("invalid-email@test", &unique_username(), "password"))
            .await
            .unwrap();

        assert_eq!(outcome, SignUpOutcome::Rejected(RejectReason::Validation));
        assert!(repository.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_long_email_and_username_are_created() {
        let repository = Arc::new(InMemorySellerRepository::new());
        let service = service(Arc::clone(&repository));
        let email = format!("{}@example.com", "b".repeat(330));
        let username = "a".repeat(300);

        let outcome = service
            .register(sign_up_request(&email, &username, "password"))
            .await
            .unwrap();

        assert!(matches!(outcome, SignUpOutcome::Created(_)));
        let sellers = repository.find_all().await.unwrap();
        assert_eq!(sellers[0].email, email);
        assert_eq!(sellers[0].username, username);
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected() {
        let repository = Arc::new(InMemorySellerRepository::new());
        let service = service(Arc::clone(&repository));

        let outcome = service
            .register(SignUpRequestDto {
                email: None,
                username: None,
                password: None,
            })
            .await
            .unwrap();

        assert_eq!(outcome, SignUpOutcome::Rejected(RejectReason::Validation));
        assert!(repository.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_email_and_username_are_conflicts() {
        let repository = Arc::new(InMemorySellerRepository::new());
        let service = service(Arc::clone(&repository));
        let email = unique_email();
        let username = unique_username();

        service
            .register(sign_up_request(&email, &username, "password"))
            .await
            .unwrap();

        let same_email = service
            .register(sign_up_request(&email, &unique_username(), "password"))
            .await
            .unwrap();
        let same_username = service
            .register(sign_up_request(&unique_email(), &username, "password"))
            .await
            .unwrap();

        assert_eq!(same_email, SignUpOutcome::Rejected(RejectReason::Conflict));
        assert_eq!(same_username, SignUpOutcome::Rejected(RejectReason::Conflict));
        assert_eq!(repository.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_duplicates_create_exactly_one_seller() {
        let repository = Arc::new(InMemorySellerRepository::new());
        let service = Arc::new(service(Arc::clone(&repository)));
        let email = unique_email();

        let attempts = (0..8).map(|_| {
            let service = Arc::clone(&service);
            let email = email.clone();
            tokio::spawn(async move {
                service
                    .register(sign_up_request(&email, &unique_username(), "password"))
                    .await
                    .unwrap()
            })
        });

        let outcomes: Vec<SignUpOutcome> = join_all(attempts)
            .await
            .into_iter()
            .map(|joined| joined.unwrap())
            .collect();

        let created = outcomes
            .iter()
            .filter(|o| matches!(o, SignUpOutcome::Created(_)))
            .count();
        let conflicts = outcomes
            .iter()
            .filter(|o| **o == SignUpOutcome::Rejected(RejectReason::Conflict))
            .count();

        assert_eq!(created, 1);
        assert_eq!(conflicts, 7);
        assert_eq!(repository.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_database_failure_is_an_error() {
        let service = SignUpService::new(
            Arc::new(FailingSellerRepository),
            Arc::new(test_password_hasher()),
        );

        let result = service
            .register(sign_up_request(&unique_email(), &unique_username(), "password"))
            .await;

        let error = tokio_test::assert_err!(result);
        assert!(matches!(error, AppError::Database(_)));
    }

    #[test]
    fn test_reject_reasons_map_to_bad_request() {
        use axum::http::StatusCode;

        assert_eq!(
            AppError::from(RejectReason::Validation).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(RejectReason::Conflict).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}

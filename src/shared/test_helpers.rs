#![cfg(test)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use uuid::Uuid;

use crate::features::sellers::dtos::SignUpRequestDto;
use crate::features::sellers::models::{NewSeller, Seller};
use crate::features::sellers::repositories::{SaveSellerError, SellerRepository};
use crate::features::sellers::{routes, SignUpService};
use crate::modules::password::{BcryptPasswordHasher, DelegatingPasswordHasher};

/// In-memory seller storage with the same uniqueness contract as the database
#[derive(Default)]
pub struct InMemorySellerRepository {
    sellers: Mutex<Vec<Seller>>,
}

impl InMemorySellerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SellerRepository for InMemorySellerRepository {
    async fn save(&self, seller: NewSeller) -> Result<Seller, SaveSellerError> {
        let mut sellers = self.sellers.lock().unwrap();

        if sellers.iter().any(|s| s.email == seller.email) {
            return Err(SaveSellerError::Conflict {
                constraint: Some("sellers_email_key".to_string()),
            });
        }
        if sellers.iter().any(|s| s.username == seller.username) {
            return Err(SaveSellerError::Conflict {
                constraint: Some("sellers_username_key".to_string()),
            });
        }

        let stored = Seller {
            id: seller.id,
            email: seller.email,
            username: seller.username,
            hashed_password: seller.hashed_password,
            created_at: Utc::now(),
        };
        sellers.push(stored.clone());

        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Seller>, sqlx::Error> {
        Ok(self.sellers.lock().unwrap().clone())
    }
}

/// Repository whose storage is always unavailable
pub struct FailingSellerRepository;

#[async_trait]
impl SellerRepository for FailingSellerRepository {
    async fn save(&self, _seller: NewSeller) -> Result<Seller, SaveSellerError> {
        Err(SaveSellerError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_all(&self) -> Result<Vec<Seller>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// Delegating bcrypt hasher at the minimum cost, to keep tests fast
pub fn test_password_hasher() -> DelegatingPasswordHasher {
    DelegatingPasswordHasher::new(
        BcryptPasswordHasher::ID,
        Arc::new(BcryptPasswordHasher::new(4)),
    )
}

pub fn unique_email() -> String {
    format!("seller-{}@example.com", Uuid::new_v4().simple())
}

pub fn unique_username() -> String {
    format!("seller_{}", Uuid::new_v4().simple())
}

pub fn sign_up_request(email: &str, username: &str, password: &str) -> SignUpRequestDto {
    SignUpRequestDto {
        email: Some(email.to_string()),
        username: Some(username.to_string()),
        password: Some(password.to_string()),
    }
}

/// Test server exposing the sign-up route over the given repository
pub fn sign_up_server(repository: Arc<InMemorySellerRepository>) -> TestServer {
    let service = Arc::new(SignUpService::new(
        repository,
        Arc::new(test_password_hasher()),
    ));

    TestServer::new(routes::routes(service)).unwrap()
}

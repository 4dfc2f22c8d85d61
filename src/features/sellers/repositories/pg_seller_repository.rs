use async_trait::async_trait;
use sqlx::PgPool;

use super::{SaveSellerError, SellerRepository};
use crate::features::sellers::models::{NewSeller, Seller};

/// PostgreSQL-backed seller storage; uniqueness comes from the
/// `sellers_email_key` and `sellers_username_key` constraints
pub struct PgSellerRepository {
    pool: PgPool,
}

impl PgSellerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SellerRepository for PgSellerRepository {
    async fn save(&self, seller: NewSeller) -> Result<Seller, SaveSellerError> {
        sqlx::query_as::<_, Seller>(
            r#"
            INSERT INTO sellers (id, email, username, hashed_password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, username, hashed_password, created_at
            "#,
        )
        .bind(seller.id)
        .bind(&seller.email)
        .bind(&seller.username)
        .bind(&seller.hashed_password)
        .fetch_one(&self.pool)
        .await
        .map_err(SaveSellerError::from)
    }

    async fn find_all(&self) -> Result<Vec<Seller>, sqlx::Error> {
        sqlx::query_as::<_, Seller>(
            r#"
            SELECT id, email, username, hashed_password, created_at
            FROM sellers
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list sellers: {:?}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{unique_email, unique_username};

    fn new_seller(email: &str, username: &str) -> NewSeller {
        NewSeller::new(
            email.to_string(),
            username.to_string(),
            "{bcrypt}$2b$04$abcdefghijklmnopqrstuu".to_string(),
        )
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_save_returns_stored_seller(pool: PgPool) {
        let repository = PgSellerRepository::new(pool);
        let seller = new_seller(&unique_email(), &unique_username());

        let stored = repository.save(seller.clone()).await.unwrap();

        assert_eq!(stored.id, seller.id);
        assert_eq!(stored.email, seller.email);
        assert_eq!(stored.username, seller.username);
        assert_eq!(stored.hashed_password, seller.hashed_password);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_duplicate_email_is_conflict(pool: PgPool) {
        let repository = PgSellerRepository::new(pool);
        let email = unique_email();

        repository
            .save(new_seller(&email, &unique_username()))
            .await
            .unwrap();
        let result = repository.save(new_seller(&email, &unique_username())).await;

        assert!(matches!(
            result,
            Err(SaveSellerError::Conflict { constraint: Some(ref c) }) if c == "sellers_email_key"
        ));
        assert_eq!(repository.find_all().await.unwrap().len(), 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_duplicate_username_is_conflict(pool: PgPool) {
        let repository = PgSellerRepository::new(pool);
        let username = unique_username();

        repository
            .save(new_seller(&unique_email(), &username))
            .await
            .unwrap();
        let result = repository.save(new_seller(&unique_email(), &username)).await;

        assert!(matches!(
            result,
            Err(SaveSellerError::Conflict { constraint: Some(ref c) }) if c == "sellers_username_key"
        ));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_long_email_and_username_are_stored(pool: PgPool) {
        let repository = PgSellerRepository::new(pool);
        let email = format!("{}@example.com", "b".repeat(330));
        let username = "a".repeat(300);

        let stored = repository.save(new_seller(&email, &username)).await.unwrap();

        assert_eq!(stored.email, email);
        assert_eq!(stored.username, username);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_find_all_returns_sellers_in_registration_order(pool: PgPool) {
        let repository = PgSellerRepository::new(pool);
        let first = new_seller(&unique_email(), &unique_username());
        let second = new_seller(&unique_email(), &unique_username());

        repository.save(first.clone()).await.unwrap();
        repository.save(second.clone()).await.unwrap();

        let ids: Vec<_> = repository
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }
}

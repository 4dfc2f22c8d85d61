mod pg_seller_repository;
mod seller_repository;

pub use pg_seller_repository::PgSellerRepository;
pub use seller_repository::{SaveSellerError, SellerRepository};

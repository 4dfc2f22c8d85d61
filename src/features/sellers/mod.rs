//! Seller sign-up feature.
//!
//! Open registration for marketplace sellers: validates the candidate
//! account, hashes the password and stores the seller. Duplicate email or
//! username is rejected exactly like malformed input.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/seller/signUp` | No | Register new seller (204 / 400, empty body) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgSellerRepository;
pub use services::SignUpService;

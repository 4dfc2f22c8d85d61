use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::sellers::handlers;
use crate::features::sellers::services::SignUpService;

/// Create routes for the sellers feature
///
/// Note: sign-up is public (no authentication required).
pub fn routes(service: Arc<SignUpService>) -> Router {
    Router::new()
        .route("/seller/signUp", post(handlers::sign_up))
        .with_state(service)
}

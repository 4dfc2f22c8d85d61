//! Seller sign-up handler

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::sellers::dtos::SignUpRequestDto;
use crate::features::sellers::services::{SignUpOutcome, SignUpService};

/// Register a new seller
///
/// Responds 204 on success and 400 on any rejection, both with an empty body.
/// Invalid input and an already registered email or username are
/// indistinguishable to the caller.
#[utoipa::path(
    post,
    path = "/seller/signUp",
    request_body = SignUpRequestDto,
    responses(
        (status = 204, description = "Seller registered"),
        (status = 400, description = "Invalid request or seller already exists")
    ),
    tag = "sellers"
)]
pub async fn sign_up(
    State(service): State<Arc<SignUpService>>,
    AppJson(dto): AppJson<SignUpRequestDto>,
) -> Result<StatusCode> {
    match service.register(dto).await? {
        SignUpOutcome::Created(seller_id) => {
            tracing::debug!("Responding 204 for seller {}", seller_id);
            Ok(StatusCode::NO_CONTENT)
        }
        SignUpOutcome::Rejected(reason) => Err(reason.into()),
    }
}

use utoipa::{Modify, OpenApi};

use crate::features::sellers::{dtos as sellers_dtos, handlers as sellers_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Sellers (public)
        sellers_handlers::sign_up,
    ),
    components(
        schemas(
            sellers_dtos::SignUpRequestDto,
        )
    ),
    tags(
        (name = "sellers", description = "Open seller registration"),
    ),
    info(
        title = "Seller Sign-Up API",
        version = "0.1.0",
        description = "Open seller registration endpoint",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{agora, room, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Classroom API", description = "Room scheduling and AI relay backend"),
    modifiers(&BearerAuth),
    tags(
        (name = "room", description = "Ordinary room scheduling"),
        (name = "user", description = "Signed-in user profile"),
        (name = "agora", description = "AI conversation relay")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by every route.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(room::create_ordinary))
        .routes(routes!(room::get_ordinary_info))
        .routes(routes!(user::get_info))
        .routes(routes!(agora::stop))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}

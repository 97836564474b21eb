use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const USER_TAG: &str = "User";

/// Name of the security scheme referenced by every operation.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Where the generated OpenAPI document is served.
pub const OPENAPI_JSON_PATH: &str = "/swagger/v1/swagger.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "usuario-api",
        description = "CRUD API for users",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::error::ValidationFieldError,
        )
    ),
    tags(
        (name = USER_TAG, description = "User management endpoints"),
    )
)]
pub struct ApiDoc;

/// Registers the API key header scheme under the configured header name.
pub struct SecurityAddon<'a> {
    header: &'a str,
}

impl<'a> SecurityAddon<'a> {
    pub fn new(header: &'a str) -> Self {
        Self { header }
    }
}

impl Modify for SecurityAddon<'_> {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            API_KEY_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                self.header,
                "Static client key",
            ))),
        );
    }
}

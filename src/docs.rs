use cakeshop_models::Role;
use cakeshop_models::admin::{BanRequest, UnbanRequest};
use cakeshop_models::auth::{RegisterRequest, TokenRequest};
use cakeshop_models::profile::{UpdateCakeRequest, UpdateEmailRequest, UpdatePasswordRequest};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::issue_token,
        crate::modules::users::controller::get_me,
        crate::modules::users::controller::get_email,
        crate::modules::users::controller::get_cake,
        crate::modules::users::controller::update_cake,
        crate::modules::users::controller::update_email,
        crate::modules::users::controller::update_password,
        crate::modules::admin::controller::ban_user,
        crate::modules::admin::controller::unban_user,
        crate::modules::admin::controller::inspect_user,
    ),
    components(
        schemas(
            Role,
            RegisterRequest,
            TokenRequest,
            UpdateCakeRequest,
            UpdateEmailRequest,
            UpdatePasswordRequest,
            BanRequest,
            UnbanRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and credential exchange"),
        (name = "Users", description = "Self-service profile endpoints"),
        (name = "Admin", description = "Ban management and audit")
    ),
    info(
        title = "Cakeshop API",
        version = "0.1.0",
        description = "Account service with bearer-token auth, role gates, and an auditable ban ledger. Responses are plain text.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/user/register",
            "/user/jwt",
            "/user/me",
            "/user/email",
            "/cake",
            "/user/favorite_cake",
            "/user/password",
            "/admin/ban",
            "/admin/unban",
            "/admin/inspect",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}

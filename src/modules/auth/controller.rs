use axum::extract::State;
use axum::http::StatusCode;
use cakeshop_core::AppError;
use cakeshop_models::auth::{RegisterRequest, TokenRequest};
use tracing::instrument;

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new account
#[utoipa::path(
    post,
    path = "/user/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = String),
        (status = 409, description = "Email already taken", body = String),
        (status = 422, description = "Validation error or unreadable body", body = String),
        (status = 500, description = "Internal server error", body = String)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, &'static str), AppError> {
    AuthService::register(state.store.as_ref(), dto, state.server_config.bcrypt_cost).await?;
    Ok((StatusCode::CREATED, "registered"))
}

/// Exchange credentials for an access token
///
/// The token is returned as the plain-text body.
#[utoipa::path(
    post,
    path = "/user/jwt",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Signed access token", body = String),
        (status = 422, description = "Invalid login params or unreadable body", body = String),
        (status = 500, description = "Internal server error", body = String)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TokenRequest>,
) -> Result<String, AppError> {
    AuthService::issue_token(state.store.as_ref(), dto, state.jwt_config()).await
}

use axum::extract::State;
use cakeshop_core::AppError;
use cakeshop_models::profile::{UpdateCakeRequest, UpdateEmailRequest, UpdatePasswordRequest};
use tracing::instrument;

use super::service::UserService;
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Favorite cake followed by email
#[utoipa::path(
    get,
    path = "/user/me",
    responses(
        (status = 200, description = "Favorite cake and email", body = String),
        (status = 401, description = "Unauthorized or banned", body = String)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> String {
    format!("{}{}", user.favorite_cake, user.email)
}

#[utoipa::path(
    get,
    path = "/user/email",
    responses(
        (status = 200, description = "Caller's email", body = String),
        (status = 401, description = "Unauthorized or banned", body = String)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn get_email(CurrentUser(user): CurrentUser) -> String {
    user.email
}

#[utoipa::path(
    get,
    path = "/cake",
    responses(
        (status = 200, description = "Caller's favorite cake", body = String),
        (status = 401, description = "Unauthorized or banned", body = String)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn get_cake(CurrentUser(user): CurrentUser) -> String {
    user.favorite_cake
}

#[utoipa::path(
    post,
    path = "/user/favorite_cake",
    request_body = UpdateCakeRequest,
    responses(
        (status = 200, description = "Cake updated", body = String),
        (status = 401, description = "Unauthorized or banned", body = String),
        (status = 422, description = "Validation error", body = String)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn update_cake(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<UpdateCakeRequest>,
) -> Result<&'static str, AppError> {
    UserService::update_cake(state.store.as_ref(), &user, dto)?;
    Ok("cake updated")
}

/// Change the caller's email
///
/// Tokens issued for the old address stop working.
#[utoipa::path(
    post,
    path = "/user/email",
    request_body = UpdateEmailRequest,
    responses(
        (status = 200, description = "Email updated", body = String),
        (status = 401, description = "Unauthorized or banned", body = String),
        (status = 409, description = "Email already taken", body = String),
        (status = 422, description = "Validation error", body = String)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn update_email(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<UpdateEmailRequest>,
) -> Result<&'static str, AppError> {
    UserService::update_email(state.store.as_ref(), &user, dto)?;
    Ok("email updated")
}

#[utoipa::path(
    post,
    path = "/user/password",
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = String),
        (status = 401, description = "Unauthorized or banned", body = String),
        (status = 422, description = "Validation error", body = String)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn update_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<UpdatePasswordRequest>,
) -> Result<&'static str, AppError> {
    UserService::update_password(
        state.store.as_ref(),
        &user,
        dto,
        state.server_config.bcrypt_cost,
    )
    .await?;
    Ok("password updated")
}

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use cakeshop_core::{AppError, ValidateRequest, ValidationError};
use cakeshop_models::admin::{BanRequest, InspectQuery, UnbanRequest};
use chrono::Utc;
use tracing::{debug, instrument};

use super::service::AdminService;
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Ban an account
///
/// The ban takes effect on the target's next request, including requests
/// made with tokens issued before the ban.
#[utoipa::path(
    post,
    path = "/admin/ban",
    request_body = BanRequest,
    responses(
        (status = 200, description = "User banned", body = String),
        (status = 401, description = "Unauthorized or banned", body = String),
        (status = 403, description = "Permission denied", body = String),
        (status = 404, description = "User does not exist", body = String),
        (status = 422, description = "Validation error", body = String)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip_all)]
pub async fn ban_user(
    State(state): State<AppState>,
    CurrentUser(executor): CurrentUser,
    ValidatedJson(dto): ValidatedJson<BanRequest>,
) -> Result<String, AppError> {
    AdminService::ban_user(
        state.store.as_ref(),
        &executor.email,
        &dto.email,
        &dto.reason,
        Utc::now(),
    )?;
    Ok(format!("user {} banned", dto.email))
}

#[utoipa::path(
    post,
    path = "/admin/unban",
    request_body = UnbanRequest,
    responses(
        (status = 200, description = "User unbanned", body = String),
        (status = 401, description = "Unauthorized or banned", body = String),
        (status = 403, description = "Permission denied", body = String),
        (status = 404, description = "User does not exist", body = String),
        (status = 422, description = "Validation error", body = String)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip_all)]
pub async fn unban_user(
    State(state): State<AppState>,
    CurrentUser(executor): CurrentUser,
    ValidatedJson(dto): ValidatedJson<UnbanRequest>,
) -> Result<String, AppError> {
    AdminService::unban_user(state.store.as_ref(), &executor.email, &dto.email, Utc::now())?;
    Ok(format!("user {} unbanned", dto.email))
}

/// Ban history of an account
#[utoipa::path(
    get,
    path = "/admin/inspect",
    params(InspectQuery),
    responses(
        (status = 200, description = "Rendered ban history", body = String),
        (status = 401, description = "Unauthorized or banned", body = String),
        (status = 403, description = "Permission denied", body = String),
        (status = 404, description = "User does not exist", body = String),
        (status = 422, description = "Validation error", body = String)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip_all)]
pub async fn inspect_user(
    State(state): State<AppState>,
    query: Result<Query<InspectQuery>, QueryRejection>,
) -> Result<String, AppError> {
    let Query(query) = query.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "query string rejected");
        AppError::from(ValidationError::UnreadableBody)
    })?;
    query.validate()?;
    AdminService::inspect(state.store.as_ref(), &query.email)
}

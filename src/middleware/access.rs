//! Access pipeline for protected routes.
//!
//! Every gated request runs the same steps in the same order:
//!
//! 1. read the `Authorization` header (missing or non-UTF-8 reads as empty)
//! 2. verify the bearer token and take its subject as the caller's email
//! 3. load the caller's record from the store
//! 4. reject banned callers, whatever their role
//! 5. reject callers whose role does not grant the route's role
//!
//! The first failing step decides the response. On success the loaded record
//! is attached to the request as [`CurrentUser`].

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use cakeshop_auth::IdentityVerifier;
use cakeshop_core::AppError;
use cakeshop_models::{Role, User};
use cakeshop_observability::track_access_denied;
use cakeshop_store::UserStore;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("you are banned! Reason: {reason}")]
    Banned { reason: String },

    #[error("permission denied")]
    PermissionDenied,
}

impl AccessError {
    fn metric_label(&self) -> &'static str {
        match self {
            AccessError::Unauthorized => "unauthorized",
            AccessError::Banned { .. } => "banned",
            AccessError::PermissionDenied => "role",
        }
    }
}

impl From<AccessError> for AppError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::PermissionDenied => AppError::forbidden(err.to_string()),
            AccessError::Unauthorized | AccessError::Banned { .. } => {
                AppError::unauthorized(err.to_string())
            }
        }
    }
}

/// Runs the pipeline against a raw header value and returns the caller's
/// current record.
pub fn authorize(
    verifier: &IdentityVerifier,
    store: &dyn UserStore,
    header_value: &str,
    required: Role,
) -> Result<User, AccessError> {
    let email = verifier
        .verify(header_value)
        .map_err(|_| AccessError::Unauthorized)?;

    let user = store.get(&email).map_err(|_| {
        debug!(email = %email, "token subject has no account");
        AccessError::Unauthorized
    })?;

    if user.is_banned() {
        let reason = match user.ban_reason() {
            Some(reason) => reason.to_string(),
            None => {
                error!(email = %user.email, "banned account has no ban event on record");
                String::new()
            }
        };
        return Err(AccessError::Banned { reason });
    }

    if !user.role.grants(required) {
        return Err(AccessError::PermissionDenied);
    }

    Ok(user)
}

async fn access_gate(state: &AppState, mut req: Request, next: Next, required: Role) -> Response {
    let outcome = {
        let header_value = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");
        authorize(&state.verifier, state.store.as_ref(), header_value, required)
    };

    match outcome {
        Ok(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            next.run(req).await
        }
        Err(err) => {
            warn!(
                path = %req.uri().path(),
                required = %required,
                reason = err.metric_label(),
                "access denied"
            );
            track_access_denied(err.metric_label());
            AppError::from(err).into_response()
        }
    }
}

/// Gate for routes any active account may reach.
///
/// ```rust,ignore
/// let routes = init_users_router()
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_user));
/// ```
pub async fn require_user(State(state): State<AppState>, req: Request, next: Next) -> Response {
    access_gate(&state, req, next, Role::User).await
}

/// Gate for administrator routes.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    access_gate(&state, req, next, Role::Admin).await
}

/// The caller's record as loaded by the access gate on this request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AccessError::Unauthorized.into())
    }
}

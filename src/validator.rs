use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use cakeshop_core::validation::{ValidateRequest, ValidationError};
use cakeshop_core::AppError;
use serde::de::DeserializeOwned;
use tracing::debug;

/// JSON body that has been decoded and passed its field rules.
///
/// The body is decoded whatever the `Content-Type`. Anything that does not
/// decode into `T` is rejected with `could not read params` (422) before
/// validation runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidateRequest,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            debug!(error = %rejection.body_text(), "request body rejected");
            AppError::from(ValidationError::UnreadableBody)
        })?;

        let value: T = serde_json::from_slice(&bytes).map_err(|e| {
            debug!(error = %e, "request body did not decode");
            AppError::from(ValidationError::UnreadableBody)
        })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

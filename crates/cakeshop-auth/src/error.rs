use cakeshop_core::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Any verification failure. The cause is deliberately dropped.
    #[error("unauthorized")]
    Unauthorized,

    #[error("Failed to create token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => AppError::unauthorized(err.to_string()),
            AuthError::Signing(_) => AppError::internal(err),
        }
    }
}

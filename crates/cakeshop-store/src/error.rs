use cakeshop_core::AppError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("user with same login already exists")]
    AlreadyExists,

    #[error("user does not exist")]
    NotFound,
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists => AppError::conflict(err),
            StoreError::NotFound => AppError::not_found(err),
        }
    }
}

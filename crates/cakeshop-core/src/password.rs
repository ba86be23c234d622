//! Password digests.
//!
//! Digests are bcrypt hash strings. Plaintext is never stored or compared
//! directly. The `*_blocking` variants move the work onto tokio's blocking
//! pool so request tasks are not stalled by the key schedule.

use bcrypt::{hash, verify};

use crate::errors::AppError;

pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, digest: &str) -> Result<bool, AppError> {
    verify(password, digest)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}

pub async fn hash_password_blocking(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .map_err(AppError::internal)?
}

pub async fn verify_password_blocking(password: String, digest: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &digest))
        .await
        .map_err(AppError::internal)?
}

//! Registration and credential exchange DTOs.

use cakeshop_core::validation::{ValidateRequest, ValidationError, validate_registration};
use serde::Deserialize;
use utoipa::ToSchema;

/// New account request.
///
/// Missing fields deserialize as empty strings so they are reported by the
/// field rules rather than as an unreadable body.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    #[schema(example = "a@mail.com")]
    pub email: String,
    #[schema(example = "password1")]
    pub password: String,
    #[schema(example = "cheesecake")]
    pub favorite_cake: String,
}

impl ValidateRequest for RegisterRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_registration(&self.email, &self.password, &self.favorite_cake)
    }
}

/// Credentials exchanged for a bearer token.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct TokenRequest {
    #[schema(example = "a@mail.com")]
    pub email: String,
    #[schema(example = "password1")]
    pub password: String,
}

impl ValidateRequest for TokenRequest {
    // Checked against the store instead, so that a malformed email and an
    // unknown one fail the same way.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

//! Administrative DTOs: ban, unban, and history inspection.

use cakeshop_core::validation::{ValidateRequest, ValidationError, validate_email};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct BanRequest {
    #[schema(example = "a@mail.com")]
    pub email: String,
    #[schema(example = "spam")]
    pub reason: String,
}

impl ValidateRequest for BanRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UnbanRequest {
    #[schema(example = "a@mail.com")]
    pub email: String,
}

impl ValidateRequest for UnbanRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct InspectQuery {
    /// Account whose ban history is rendered
    pub email: String,
}

impl ValidateRequest for InspectQuery {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)
    }
}

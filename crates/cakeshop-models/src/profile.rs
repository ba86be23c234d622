//! Self-service profile update DTOs.
//!
//! These always act on the authenticated caller's own record.

use cakeshop_core::validation::{
    ValidateRequest, ValidationError, validate_cake, validate_email, validate_password,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateCakeRequest {
    #[schema(example = "napoleon")]
    pub favorite_cake: String,
}

impl ValidateRequest for UpdateCakeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_cake(&self.favorite_cake)
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateEmailRequest {
    #[schema(example = "new@mail.com")]
    pub email: String,
}

impl ValidateRequest for UpdateEmailRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdatePasswordRequest {
    #[schema(example = "password2")]
    pub password: String,
}

impl ValidateRequest for UpdatePasswordRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_password(&self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_rules() {
        let cake = UpdateCakeRequest {
            favorite_cake: "red velvet".to_string(),
        };
        assert_eq!(cake.validate(), Err(ValidationError::CakeNotAlphabetic));

        let email = UpdateEmailRequest {
            email: "nope".to_string(),
        };
        assert_eq!(email.validate(), Err(ValidationError::EmailMalformed));

        let password = UpdatePasswordRequest {
            password: "1234567".to_string(),
        };
        assert_eq!(password.validate(), Err(ValidationError::PasswordTooShort));
    }
}

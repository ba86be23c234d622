use std::sync::Arc;

use cakeshop_config::JwtConfig;

use crate::error::AuthError;
use crate::jwt::verify_token;

const BEARER_PREFIX: &str = "Bearer ";

/// Resolves an `Authorization` header value to the email it was issued for.
///
/// A header without the `Bearer ` prefix is treated as carrying an empty
/// token, which never verifies. Callers see a single
/// [`AuthError::Unauthorized`] regardless of why verification failed.
#[derive(Clone, Debug)]
pub struct IdentityVerifier {
    jwt_config: Arc<JwtConfig>,
}

impl IdentityVerifier {
    pub fn new(jwt_config: JwtConfig) -> Self {
        Self {
            jwt_config: Arc::new(jwt_config),
        }
    }

    pub fn verify(&self, header_value: &str) -> Result<String, AuthError> {
        let token = header_value.strip_prefix(BEARER_PREFIX).unwrap_or("");
        if token.is_empty() {
            return Err(AuthError::Unauthorized);
        }

        let claims = verify_token(token, &self.jwt_config)?;
        Ok(claims.sub)
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }
}

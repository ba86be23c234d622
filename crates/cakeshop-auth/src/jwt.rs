//! JWT signing and decoding.
//!
//! Tokens are HS256, signed with [`JwtConfig::secret`]. Decoding checks the
//! signature and `exp` with jsonwebtoken's default leeway.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use cakeshop_config::JwtConfig;

use crate::claims::Claims;
use crate::error::AuthError;

/// Signs a token whose subject is `email`.
///
/// # Errors
///
/// Returns [`AuthError::Signing`] if encoding fails.
pub fn create_access_token(email: &str, jwt_config: &JwtConfig) -> Result<String, AuthError> {
    let now = usize::try_from(Utc::now().timestamp()).unwrap_or(0);
    let lifetime = usize::try_from(jwt_config.access_token_expiry).unwrap_or(usize::MAX);
    let exp = now.saturating_add(lifetime);

    let claims = Claims {
        sub: email.to_string(),
        exp,
        iat: now,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )?)
}

/// Verifies a token and returns its claims.
///
/// Malformed, expired, and badly signed tokens all yield
/// [`AuthError::Unauthorized`].
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        debug!(error = %e, "token rejected");
        AuthError::Unauthorized
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig::new("test_secret_key_for_testing_purposes", 3600)
    }

    #[test]
    fn test_create_and_verify() {
        let config = test_config();
        let token = create_access_token("a@mail.com", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "a@mail.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_access_token("a@mail.com", &test_config()).unwrap();
        let other = JwtConfig::new("another_secret", 3600);

        assert!(matches!(
            verify_token(&token, &other),
            Err(AuthError::Unauthorized)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "a@mail.com".to_string(),
            exp: now - 7200,
            iat: now - 10800,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            verify_token(&token, &config),
            Err(AuthError::Unauthorized)
        ));
    }

    #[test]
    fn test_huge_expiry_saturates() {
        let config = JwtConfig::new("test_secret_key_for_testing_purposes", u64::MAX);
        let token = create_access_token("a@mail.com", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.exp, usize::MAX);
    }

    #[test]
    fn test_garbage_rejected() {
        let config = test_config();
        assert!(verify_token("", &config).is_err());
        assert!(verify_token("not.a.token", &config).is_err());
    }
}

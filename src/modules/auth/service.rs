use cakeshop_auth::create_access_token;
use cakeshop_config::JwtConfig;
use cakeshop_core::AppError;
use cakeshop_core::password::{hash_password_blocking, verify_password_blocking};
use cakeshop_models::User;
use cakeshop_models::auth::{RegisterRequest, TokenRequest};
use cakeshop_observability::{track_token_issued, track_token_rejected, track_user_registered};
use cakeshop_store::UserStore;
use tracing::{debug, info, instrument};

const INVALID_LOGIN: &str = "invalid login params";

pub struct AuthService;

impl AuthService {
    /// Stores a new `User`-role account. The DTO has already passed
    /// registration validation.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn register(
        store: &dyn UserStore,
        dto: RegisterRequest,
        bcrypt_cost: u32,
    ) -> Result<(), AppError> {
        let digest = hash_password_blocking(dto.password, bcrypt_cost).await?;
        let user = User::new(&dto.email, digest, dto.favorite_cake);

        store.add(&dto.email, user)?;

        track_user_registered();
        info!("user registered");
        Ok(())
    }

    /// Exchanges credentials for a signed access token.
    ///
    /// Unknown accounts and wrong passwords get the same answer.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn issue_token(
        store: &dyn UserStore,
        dto: TokenRequest,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        let user = match store.get(&dto.email) {
            Ok(user) => user,
            Err(e) => {
                debug!(error = %e, "credential exchange for unknown account");
                return Err(Self::invalid_login());
            }
        };

        let is_valid = verify_password_blocking(dto.password, user.password_digest).await?;
        if !is_valid {
            debug!("credential exchange with wrong password");
            return Err(Self::invalid_login());
        }

        let token = create_access_token(&user.email, jwt_config)?;
        track_token_issued();
        Ok(token)
    }

    fn invalid_login() -> AppError {
        track_token_rejected();
        AppError::unprocessable(anyhow::anyhow!(INVALID_LOGIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use cakeshop_auth::verify_token;
    use cakeshop_store::{InMemoryUserStore, StoreError};

    const COST: u32 = 4;

    fn registration(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "password1".to_string(),
            favorite_cake: "cheesecake".to_string(),
        }
    }

    fn credentials(email: &str, password: &str) -> TokenRequest {
        TokenRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn jwt() -> JwtConfig {
        JwtConfig::new("auth-service-secret", 3600)
    }

    #[tokio::test]
    async fn test_register_stores_hashed_user_record() {
        let store = InMemoryUserStore::new();
        AuthService::register(&store, registration("a@mail.com"), COST)
            .await
            .unwrap();

        let user = store.get("a@mail.com").unwrap();
        assert_ne!(user.password_digest, "password1");
        assert_eq!(user.favorite_cake, "cheesecake");
        assert_eq!(user.role, cakeshop_models::Role::User);
        assert!(!user.is_banned());
        assert!(user.ban_history().is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_is_conflict() {
        let store = InMemoryUserStore::new();
        AuthService::register(&store, registration("a@mail.com"), COST)
            .await
            .unwrap();

        let err = AuthService::register(&store, registration("a@mail.com"), COST)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.to_string(), StoreError::AlreadyExists.to_string());
    }

    #[tokio::test]
    async fn test_issue_token_for_valid_credentials() {
        let store = InMemoryUserStore::new();
        AuthService::register(&store, registration("a@mail.com"), COST)
            .await
            .unwrap();

        let token = AuthService::issue_token(&store, credentials("a@mail.com", "password1"), &jwt())
            .await
            .unwrap();
        assert_eq!(verify_token(&token, &jwt()).unwrap().sub, "a@mail.com");
    }

    #[tokio::test]
    async fn test_issue_token_wrong_password_and_unknown_user_look_alike() {
        let store = InMemoryUserStore::new();
        AuthService::register(&store, registration("a@mail.com"), COST)
            .await
            .unwrap();

        let wrong = AuthService::issue_token(&store, credentials("a@mail.com", "password2"), &jwt())
            .await
            .unwrap_err();
        let unknown =
            AuthService::issue_token(&store, credentials("b@mail.com", "password1"), &jwt())
                .await
                .unwrap_err();

        assert_eq!(wrong.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(unknown.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(wrong.to_string(), INVALID_LOGIN);
        assert_eq!(unknown.to_string(), INVALID_LOGIN);
    }

    #[tokio::test]
    async fn test_banned_user_can_still_exchange_credentials() {
        let store = InMemoryUserStore::new();
        AuthService::register(&store, registration("a@mail.com"), COST)
            .await
            .unwrap();
        let mut user = store.get("a@mail.com").unwrap();
        user.ban("root@mail.com", "spam", chrono::Utc::now());
        store.update("a@mail.com", user).unwrap();

        assert!(
            AuthService::issue_token(&store, credentials("a@mail.com", "password1"), &jwt())
                .await
                .is_ok()
        );
    }
}

use std::sync::Arc;

use cakeshop_auth::IdentityVerifier;
use cakeshop_config::{AdminConfig, CorsConfig, JwtConfig, ServerConfig};
use cakeshop_core::AppError;
use cakeshop_store::{InMemoryUserStore, UserStore, bootstrap_admin};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub verifier: IdentityVerifier,
    pub server_config: ServerConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UserStore>,
        jwt_config: JwtConfig,
        server_config: ServerConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            store,
            verifier: IdentityVerifier::new(jwt_config),
            server_config,
            cors_config,
        }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        self.verifier.jwt_config()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("users", &self.store.len())
            .field("server_config", &self.server_config)
            .finish_non_exhaustive()
    }
}

/// Builds a fresh in-memory store seeded with the configured administrator.
pub async fn init_app_state(
    jwt_config: JwtConfig,
    admin_config: AdminConfig,
    server_config: ServerConfig,
    cors_config: CorsConfig,
) -> Result<AppState, AppError> {
    let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
    bootstrap_admin(store.as_ref(), &admin_config, server_config.bcrypt_cost).await?;

    Ok(AppState::new(store, jwt_config, server_config, cors_config))
}

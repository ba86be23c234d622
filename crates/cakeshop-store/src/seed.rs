use cakeshop_config::AdminConfig;
use cakeshop_core::AppError;
use cakeshop_core::password::hash_password_blocking;
use cakeshop_core::validation::{validate_email, validate_password};
use cakeshop_models::{Role, User};
use tracing::{info, warn};

use crate::{StoreError, UserStore};

const ADMIN_CAKE: &str = "AdminCake";

/// Inserts the configured administrator with the `Admin` role.
///
/// An account already stored under the admin email is left untouched.
///
/// # Errors
///
/// Fails if the configured email or password does not pass the field
/// rules, or if hashing fails.
pub async fn bootstrap_admin(
    store: &dyn UserStore,
    admin: &AdminConfig,
    bcrypt_cost: u32,
) -> Result<(), AppError> {
    validate_email(&admin.email)?;
    validate_password(&admin.password)?;

    let digest = hash_password_blocking(admin.password.clone(), bcrypt_cost).await?;
    let record = User::new(&admin.email, digest, ADMIN_CAKE).with_role(Role::Admin);

    match store.add(&admin.email, record) {
        Ok(()) => {
            info!(email = %admin.email, "bootstrap admin created");
            Ok(())
        }
        Err(StoreError::AlreadyExists) => {
            warn!(email = %admin.email, "bootstrap admin already present, skipping");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

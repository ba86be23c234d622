use cakeshop_core::AppError;
use cakeshop_core::password::hash_password_blocking;
use cakeshop_models::User;
use cakeshop_models::profile::{UpdateCakeRequest, UpdateEmailRequest, UpdatePasswordRequest};
use cakeshop_store::UserStore;
use tracing::{info, instrument, warn};

pub struct UserService;

impl UserService {
    #[instrument(skip_all, fields(email = %current.email))]
    pub fn update_cake(
        store: &dyn UserStore,
        current: &User,
        dto: UpdateCakeRequest,
    ) -> Result<(), AppError> {
        store.modify(&current.email, &mut |user| {
            user.favorite_cake = dto.favorite_cake.clone();
        })?;
        Ok(())
    }

    #[instrument(skip_all, fields(email = %current.email))]
    pub async fn update_password(
        store: &dyn UserStore,
        current: &User,
        dto: UpdatePasswordRequest,
        bcrypt_cost: u32,
    ) -> Result<(), AppError> {
        let digest = hash_password_blocking(dto.password, bcrypt_cost).await?;

        store.modify(&current.email, &mut |user| {
            user.password_digest = digest.clone();
        })?;

        info!("password changed");
        Ok(())
    }

    /// Moves the caller's record to a new key.
    ///
    /// The new key is claimed first, so a taken address leaves both records
    /// as they were. If the old record changed between the copy and its
    /// removal, the removed version is written over the copy. If the old
    /// record is already gone, another move won the race: the copy is
    /// withdrawn and the caller gets `NotFound`.
    #[instrument(skip_all, fields(old = %current.email, new = %dto.email))]
    pub fn update_email(
        store: &dyn UserStore,
        current: &User,
        dto: UpdateEmailRequest,
    ) -> Result<(), AppError> {
        let old_email = current.email.as_str();
        let new_email = dto.email;
        if new_email == old_email {
            return Ok(());
        }

        let snapshot = store.get(old_email)?;
        let mut moved = snapshot.clone();
        moved.email = new_email.clone();
        store.add(&new_email, moved)?;

        match store.delete(old_email) {
            Ok(removed) if removed != snapshot => {
                let mut latest = removed;
                latest.email = new_email.clone();
                store.update(&new_email, latest)?;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "old record vanished during email change, withdrawing copy");
                if let Err(rollback) = store.delete(&new_email) {
                    warn!(error = %rollback, "copy already removed");
                }
                return Err(e.into());
            }
        }

        info!("email changed");
        Ok(())
    }
}

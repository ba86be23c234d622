//! Ban-state mutation and audit.
//!
//! Nothing here checks who the executor is. Only administrators reach
//! these operations, and that is decided by the access gate in front of
//! the admin routes.

use cakeshop_core::AppError;
use cakeshop_models::User;
use cakeshop_observability::track_ban_event;
use cakeshop_store::UserStore;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

pub struct AdminService;

impl AdminService {
    #[instrument(skip_all, fields(executor = %executor, target = %target))]
    pub fn ban_user(
        store: &dyn UserStore,
        executor: &str,
        target: &str,
        reason: &str,
        at: DateTime<Utc>,
    ) -> Result<User, AppError> {
        let user = store.modify(target, &mut |user| user.ban(executor, reason, at))?;

        track_ban_event("ban");
        info!(reason = %reason, "user banned");
        Ok(user)
    }

    #[instrument(skip_all, fields(executor = %executor, target = %target))]
    pub fn unban_user(
        store: &dyn UserStore,
        executor: &str,
        target: &str,
        at: DateTime<Utc>,
    ) -> Result<User, AppError> {
        let user = store.modify(target, &mut |user| user.unban(executor, at))?;

        track_ban_event("unban");
        info!("user unbanned");
        Ok(user)
    }

    /// Renders the target's ban history, oldest first.
    pub fn inspect(store: &dyn UserStore, target: &str) -> Result<String, AppError> {
        let user = store.get(target)?;
        Ok(render_history(&user))
    }
}

/// `user <email>:` followed by one line per ban event, each newline-terminated.
pub fn render_history(user: &User) -> String {
    let mut out = format!("user {}:\n", user.email);
    for event in user.ban_history() {
        out.push_str(&event.to_string());
        out.push('\n');
    }
    out
}

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{ban_user, inspect_user, unban_user};

pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/ban", post(ban_user))
        .route("/unban", post(unban_user))
        .route("/inspect", get(inspect_user))
}

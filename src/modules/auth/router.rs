use crate::state::AppState;
use axum::{Router, routing::post};

use super::controller::{issue_token, register_user};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/jwt", post(issue_token))
}

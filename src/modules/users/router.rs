use crate::modules::users::controller::{
    get_cake, get_email, get_me, update_cake, update_email, update_password,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/email", get(get_email).post(update_email))
        .route("/favorite_cake", post(update_cake))
        .route("/password", post(update_password))
}

pub fn init_cake_router() -> Router<AppState> {
    Router::new().route("/cake", get(get_cake))
}

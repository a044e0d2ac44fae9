use axum::{Router, routing::get};

use super::controller::{
    delete_user, get_user, get_user_classes, get_user_passes, get_users, update_user,
};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/{id}/classes", get(get_user_classes))
        .route("/{id}/passes", get(get_user_passes))
}

use axum::{Router, routing::get};

use super::controller::{create_pass, delete_pass, get_pass, get_passes, update_pass};
use crate::state::AppState;

pub fn init_passes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_passes).post(create_pass))
        .route("/{id}", get(get_pass).put(update_pass).delete(delete_pass))
}

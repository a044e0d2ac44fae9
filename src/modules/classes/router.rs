use axum::{Router, routing::get};

use super::controller::{
    create_class, delete_class, get_class, get_class_sessions, get_classes, update_class,
};
use crate::state::AppState;

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_classes).post(create_class))
        .route(
            "/{id}",
            get(get_class).put(update_class).delete(delete_class),
        )
        .route("/{id}/sessions", get(get_class_sessions))
}

use axum::http::{HeaderValue, Method};
use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::classes::router::init_classes_router;
use crate::modules::passes::router::init_passes_router;
use crate::modules::sessions::router::init_sessions_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

async fn root() -> &'static str {
    "Flexfit API running!"
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/", get(root))
        .nest(
            "/api",
            Router::new()
                .merge(init_auth_router())
                .nest("/users", init_users_router())
                .nest("/classes", init_classes_router())
                .nest("/sessions", init_sessions_router())
                .nest("/passes", init_passes_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}

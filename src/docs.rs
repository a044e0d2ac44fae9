use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, RegisterRequestDto};
use crate::modules::classes::model::{Class, ClassWithSessions, CreateClassDto, UpdateClassDto};
use crate::modules::passes::model::{CreatePassDto, Pass, UpdatePassDto};
use crate::modules::sessions::model::{CreateSessionDto, Session, UpdateSessionDto};
use crate::modules::users::model::{UpdateUserDto, User, UserProfile};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::get_user_classes,
        crate::modules::users::controller::get_user_passes,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::get_class,
        crate::modules::classes::controller::get_class_sessions,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::update_class,
        crate::modules::classes::controller::delete_class,
        crate::modules::sessions::controller::get_sessions,
        crate::modules::sessions::controller::get_session,
        crate::modules::sessions::controller::create_session,
        crate::modules::sessions::controller::update_session,
        crate::modules::sessions::controller::delete_session,
        crate::modules::passes::controller::get_passes,
        crate::modules::passes::controller::get_pass,
        crate::modules::passes::controller::create_pass,
        crate::modules::passes::controller::update_pass,
        crate::modules::passes::controller::delete_pass,
    ),
    components(
        schemas(
            User,
            UserProfile,
            UpdateUserDto,
            Class,
            ClassWithSessions,
            CreateClassDto,
            UpdateClassDto,
            Session,
            CreateSessionDto,
            UpdateSessionDto,
            Pass,
            CreatePassDto,
            UpdatePassDto,
            LoginRequest,
            LoginResponse,
            RegisterRequestDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Users", description = "User management endpoints"),
        (name = "Classes", description = "Class management endpoints"),
        (name = "Sessions", description = "Scheduled session endpoints"),
        (name = "Passes", description = "Class pass endpoints")
    ),
    info(
        title = "Flexfit API",
        version = "0.1.0",
        description = "REST API for booking fitness classes. Instructors publish classes and sessions; clients buy and track passes.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            // The token is sent as the raw `authorization` header value,
            // not as a Bearer scheme.
            components.add_security_scheme(
                "token_auth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("authorization"))),
            )
        }
    }
}

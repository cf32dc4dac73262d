use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use villagehub_auth::{Identity, Role};
use villagehub_config::AUTH_COOKIE_NAME;
use villagehub_core::{PaginationMeta, PaginationParams};
use villagehub_models::auth::{AuthResponse, SignInRequest, SignUpRequest};
use villagehub_models::business::{
    Business, BusinessStatus, CreateBusinessDto, ReviewBusinessDto, UpdateBusinessDto,
};
use villagehub_models::events::{CreateEventDto, Event, UpdateEventDto};
use villagehub_models::tourism::{CreateTourismSpotDto, TourismSpot, UpdateTourismSpotDto};
use villagehub_models::uploads::UploadResponse;
use villagehub_models::users::{UpdateUserRoleDto, User};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::sign_up,
        crate::modules::auth::controller::sign_in,
        crate::modules::auth::controller::sign_out,
        crate::modules::tourism::controller::list_spots,
        crate::modules::tourism::controller::get_spot,
        crate::modules::tourism::controller::create_spot,
        crate::modules::tourism::controller::update_spot,
        crate::modules::tourism::controller::delete_spot,
        crate::modules::business::controller::list_businesses,
        crate::modules::business::controller::get_business,
        crate::modules::business::controller::create_business,
        crate::modules::business::controller::update_business,
        crate::modules::business::controller::review_business,
        crate::modules::business::controller::delete_business,
        crate::modules::events::controller::list_events,
        crate::modules::events::controller::get_event,
        crate::modules::events::controller::create_event,
        crate::modules::events::controller::update_event,
        crate::modules::events::controller::delete_event,
        crate::modules::users::controller::update_user_role,
        crate::modules::users::controller::delete_user,
        crate::modules::account::controller::get_me,
        crate::modules::account::controller::list_my_businesses,
        crate::modules::account::controller::update_my_business,
        crate::modules::account::controller::delete_my_business,
        crate::modules::account::controller::upload_my_file,
        crate::modules::uploads::controller::upload,
    ),
    components(
        schemas(
            Role,
            Identity,
            User,
            UpdateUserRoleDto,
            SignUpRequest,
            SignInRequest,
            AuthResponse,
            TourismSpot,
            CreateTourismSpotDto,
            UpdateTourismSpotDto,
            Business,
            BusinessStatus,
            CreateBusinessDto,
            UpdateBusinessDto,
            ReviewBusinessDto,
            Event,
            CreateEventDto,
            UpdateEventDto,
            UploadResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Sign up, sign in and sign out"),
        (name = "Tourism", description = "Tourist spots"),
        (name = "Business", description = "Local businesses and their review"),
        (name = "Events", description = "Village events"),
        (name = "Users", description = "Account administration"),
        (name = "Account", description = "The signed-in user's profile and submissions"),
        (name = "Uploads", description = "Image uploads")
    ),
    info(
        title = "VillageHub API",
        version = "0.1.0",
        description = "Village tourism and business directory. Sessions use the `auth_token` cookie set by sign-in."
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(AUTH_COOKIE_NAME))),
            )
        }
    }
}

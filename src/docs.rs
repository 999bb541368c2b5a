use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{TokenRequest, TokenResponse};
use crate::modules::carts::model::{AddCartItemDto, CartItem};
use crate::modules::catalog::model::{ClassItem, Instructor};
use crate::modules::payments::model::{CreatePaymentIntentDto, PaymentIntentResponse};
use crate::modules::users::model::{
    AdminCheckResponse, DeleteResult, InstructorCheckResponse, MessageResponse, ModifyResult,
    Role, SignupDto, User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_token,
        crate::modules::catalog::controller::get_classes,
        crate::modules::catalog::controller::get_popular_classes,
        crate::modules::catalog::controller::get_instructors,
        crate::modules::catalog::controller::get_popular_instructors,
        crate::modules::users::controller::signup,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::check_admin,
        crate::modules::users::controller::check_instructor,
        crate::modules::users::controller::promote_to_admin,
        crate::modules::users::controller::promote_to_instructor,
        crate::modules::users::controller::delete_user,
        crate::modules::carts::controller::get_cart_items,
        crate::modules::carts::controller::add_cart_item,
        crate::modules::carts::controller::delete_cart_item,
        crate::modules::payments::controller::create_payment_intent,
    ),
    components(
        schemas(
            TokenRequest,
            TokenResponse,
            ErrorResponse,
            User,
            Role,
            SignupDto,
            MessageResponse,
            AdminCheckResponse,
            InstructorCheckResponse,
            ModifyResult,
            DeleteResult,
            ClassItem,
            Instructor,
            CartItem,
            AddCartItemDto,
            CreatePaymentIntentDto,
            PaymentIntentResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token issuance"),
        (name = "Catalog", description = "Public class and instructor listings"),
        (name = "Users", description = "Signup, role probes, and admin-guarded user management"),
        (name = "Carts", description = "Owner-guarded shopping cart"),
        (name = "Payments", description = "Payment-intent creation"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

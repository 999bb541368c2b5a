use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::check_owner;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::carts::model::{AddCartItemDto, CartItem, CartQuery};
use crate::modules::carts::service::CartService;
use crate::modules::users::model::DeleteResult;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List the caller's cart
///
/// No asserted email means no identity was claimed, so the result is an
/// empty list; a mismatched email is a forbidden assertion.
#[utoipa::path(
    get,
    path = "/carts",
    params(CartQuery),
    responses(
        (status = 200, description = "Cart items for the asserted owner", body = Vec<CartItem>),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Asserted email is not the caller's", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Carts"
)]
#[instrument(skip(state))]
pub async fn get_cart_items(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<CartQuery>,
) -> Result<Json<Vec<CartItem>>, AppError> {
    let email = match params.email.as_deref() {
        None | Some("") => return Ok(Json(Vec::new())),
        Some(email) => email,
    };

    check_owner(&auth_user, email)?;

    let items = CartService::get_items(&state.db, email).await?;
    Ok(Json(items))
}

/// Add a class to the caller's cart
#[utoipa::path(
    post,
    path = "/carts",
    request_body = AddCartItemDto,
    responses(
        (status = 200, description = "Item added", body = CartItem),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Item email is not the caller's", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Carts"
)]
#[instrument(skip(state, dto))]
pub async fn add_cart_item(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<AddCartItemDto>,
) -> Result<Json<CartItem>, AppError> {
    check_owner(&auth_user, &dto.email)?;

    let item = CartService::add_item(&state.db, dto).await?;
    Ok(Json(item))
}

/// Remove an item from a cart
#[utoipa::path(
    delete,
    path = "/carts/{id}",
    params(("id" = Uuid, Path, description = "Cart item id")),
    responses(
        (status = 200, description = "Delete result", body = DeleteResult),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Carts"
)]
#[instrument(skip(state))]
pub async fn delete_cart_item(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let deleted_count = CartService::delete_item(&state.db, id).await?;
    Ok(Json(DeleteResult { deleted_count }))
}

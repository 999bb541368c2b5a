use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{
    AdminCheckResponse, DeleteResult, InstructorCheckResponse, MessageResponse, ModifyResult,
    Role, SignupDto, User,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Sign up a new user
#[utoipa::path(
    post,
    path = "/users",
    request_body = SignupDto,
    responses(
        (status = 200, description = "User created, or already exists", body = User),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignupDto>,
) -> Result<Response, AppError> {
    match UserService::create_user(&state.db, dto).await? {
        Some(user) => Ok(Json(user).into_response()),
        None => Ok(Json(MessageResponse {
            message: "user exists".to_string(),
        })
        .into_response()),
    }
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(&state.db).await?;
    Ok(Json(users))
}

/// Probe whether an email holds the admin role
///
/// Requires a valid principal but never fails on email mismatch: it
/// answers `false` instead, so one user cannot learn another's role.
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    params(("email" = String, Path, description = "Email to probe")),
    responses(
        (status = 200, description = "Whether the email is an admin", body = AdminCheckResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn check_admin(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<AdminCheckResponse>, AppError> {
    if auth_user.email() != email {
        return Ok(Json(AdminCheckResponse { admin: false }));
    }

    let role = UserService::role_of(&state.db, &email).await?;
    Ok(Json(AdminCheckResponse {
        admin: role == Some(Role::Admin),
    }))
}

/// Probe whether an email holds the instructor role
#[utoipa::path(
    get,
    path = "/users/instructor/{email}",
    params(("email" = String, Path, description = "Email to probe")),
    responses(
        (status = 200, description = "Whether the email is an instructor", body = InstructorCheckResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn check_instructor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<InstructorCheckResponse>, AppError> {
    if auth_user.email() != email {
        return Ok(Json(InstructorCheckResponse { instructor: false }));
    }

    let role = UserService::role_of(&state.db, &email).await?;
    Ok(Json(InstructorCheckResponse {
        instructor: role == Some(Role::Instructor),
    }))
}

/// Promote a user to admin (admin only)
#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Update result", body = ModifyResult),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn promote_to_admin(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ModifyResult>, AppError> {
    let modified_count = UserService::set_role(&state.db, id, Role::Admin).await?;
    Ok(Json(ModifyResult { modified_count }))
}

/// Promote a user to instructor (admin only)
#[utoipa::path(
    patch,
    path = "/users/instructor/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Update result", body = ModifyResult),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn promote_to_instructor(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ModifyResult>, AppError> {
    let modified_count = UserService::set_role(&state.db, id, Role::Instructor).await?;
    Ok(Json(ModifyResult { modified_count }))
}

/// Delete a user (admin only)
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Delete result", body = DeleteResult),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let deleted_count = UserService::delete_user(&state.db, id).await?;
    Ok(Json(DeleteResult { deleted_count }))
}

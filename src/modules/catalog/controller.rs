use axum::{Json, extract::State};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::catalog::model::{ClassItem, Instructor};
use crate::modules::catalog::service::CatalogService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// List all classes
#[utoipa::path(
    get,
    path = "/classes",
    responses(
        (status = 200, description = "All classes", body = Vec<ClassItem>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
#[instrument(skip(state))]
pub async fn get_classes(State(state): State<AppState>) -> Result<Json<Vec<ClassItem>>, AppError> {
    let classes = CatalogService::get_classes(&state.db).await?;
    Ok(Json(classes))
}

/// Top classes by enrollment
#[utoipa::path(
    get,
    path = "/classes/popular",
    responses(
        (status = 200, description = "Six most-enrolled classes", body = Vec<ClassItem>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
#[instrument(skip(state))]
pub async fn get_popular_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassItem>>, AppError> {
    let classes = CatalogService::get_popular_classes(&state.db).await?;
    Ok(Json(classes))
}

/// List all instructors
#[utoipa::path(
    get,
    path = "/instructors",
    responses(
        (status = 200, description = "All instructors", body = Vec<Instructor>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
#[instrument(skip(state))]
pub async fn get_instructors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Instructor>>, AppError> {
    let instructors = CatalogService::get_instructors(&state.db).await?;
    Ok(Json(instructors))
}

/// Top instructors by student count
#[utoipa::path(
    get,
    path = "/instructors/popular",
    responses(
        (status = 200, description = "Six most-followed instructors", body = Vec<Instructor>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
#[instrument(skip(state))]
pub async fn get_popular_instructors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Instructor>>, AppError> {
    let instructors = CatalogService::get_popular_instructors(&state.db).await?;
    Ok(Json(instructors))
}

use anyhow::Context;
use sqlx::PgPool;

use crate::modules::catalog::model::{ClassItem, Instructor};
use crate::utils::errors::AppError;

/// How many entries the "popular" views return.
const POPULAR_LIMIT: i64 = 6;

pub struct CatalogService;

impl CatalogService {
    pub async fn get_classes(db: &PgPool) -> Result<Vec<ClassItem>, AppError> {
        let classes = sqlx::query_as::<_, ClassItem>(
            "SELECT id, name, instructor, image, price_cents, available_seats, enrolled \
             FROM classes",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch classes")
        .map_err(AppError::database)?;

        Ok(classes)
    }

    pub async fn get_popular_classes(db: &PgPool) -> Result<Vec<ClassItem>, AppError> {
        let classes = sqlx::query_as::<_, ClassItem>(
            "SELECT id, name, instructor, image, price_cents, available_seats, enrolled \
             FROM classes ORDER BY enrolled DESC LIMIT $1",
        )
        .bind(POPULAR_LIMIT)
        .fetch_all(db)
        .await
        .context("Failed to fetch popular classes")
        .map_err(AppError::database)?;

        Ok(classes)
    }

    pub async fn get_instructors(db: &PgPool) -> Result<Vec<Instructor>, AppError> {
        let instructors = sqlx::query_as::<_, Instructor>(
            "SELECT id, name, email, image, students FROM instructors",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch instructors")
        .map_err(AppError::database)?;

        Ok(instructors)
    }

    pub async fn get_popular_instructors(db: &PgPool) -> Result<Vec<Instructor>, AppError> {
        let instructors = sqlx::query_as::<_, Instructor>(
            "SELECT id, name, email, image, students \
             FROM instructors ORDER BY students DESC LIMIT $1",
        )
        .bind(POPULAR_LIMIT)
        .fetch_all(db)
        .await
        .context("Failed to fetch popular instructors")
        .map_err(AppError::database)?;

        Ok(instructors)
    }
}

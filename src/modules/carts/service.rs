use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::carts::model::{AddCartItemDto, CartItem};
use crate::utils::errors::AppError;

pub struct CartService;

impl CartService {
    pub async fn get_items(db: &PgPool, email: &str) -> Result<Vec<CartItem>, AppError> {
        let items = sqlx::query_as::<_, CartItem>(
            "SELECT id, email, class_id, class_name, image, price_cents \
             FROM carts WHERE email = $1 ORDER BY created_at",
        )
        .bind(email)
        .fetch_all(db)
        .await
        .context("Failed to fetch cart items")
        .map_err(AppError::database)?;

        Ok(items)
    }

    pub async fn add_item(db: &PgPool, dto: AddCartItemDto) -> Result<CartItem, AppError> {
        let item = sqlx::query_as::<_, CartItem>(
            "INSERT INTO carts (email, class_id, class_name, image, price_cents) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, email, class_id, class_name, image, price_cents",
        )
        .bind(&dto.email)
        .bind(dto.class_id)
        .bind(&dto.class_name)
        .bind(&dto.image)
        .bind(dto.price_cents)
        .fetch_one(db)
        .await
        .context("Failed to add cart item")
        .map_err(AppError::database)?;

        Ok(item)
    }

    pub async fn delete_item(db: &PgPool, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM carts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete cart item")
            .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }
}

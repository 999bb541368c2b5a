use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A class offered on the marketplace.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ClassItem {
    pub id: Uuid,
    pub name: String,
    pub instructor: String,
    pub image: Option<String>,
    pub price_cents: i64,
    pub available_seats: i32,
    pub enrolled: i32,
}

/// An instructor profile shown in the catalog.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Instructor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub students: i32,
}

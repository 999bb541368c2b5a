use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A class sitting in a user's cart, keyed to the owner by email.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CartItem {
    pub id: Uuid,
    pub email: String,
    pub class_id: Uuid,
    pub class_name: String,
    pub image: Option<String>,
    pub price_cents: i64,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct AddCartItemDto {
    #[validate(email)]
    pub email: String,
    pub class_id: Uuid,
    #[validate(length(min = 1))]
    pub class_name: String,
    pub image: Option<String>,
    pub price_cents: i64,
}

/// Owner assertion for cart reads. Absent (or empty) means "no identity
/// asserted" and yields an empty result set rather than an error.
#[derive(Deserialize, Debug, Clone, IntoParams)]
pub struct CartQuery {
    pub email: Option<String>,
}

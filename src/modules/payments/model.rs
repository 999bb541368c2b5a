use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to open a payment intent for the caller's cart total.
/// `price` is in the store's display currency (dollars). The upper bound
/// keeps the cent conversion well inside `i64` range.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreatePaymentIntentDto {
    #[validate(range(min = 0.0, max = 1_000_000.0, message = "price is out of range"))]
    pub price: f64,
}

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

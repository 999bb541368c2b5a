use axum::{Router, routing::post};

use crate::modules::payments::controller::create_payment_intent;
use crate::state::AppState;

pub fn init_payments_router() -> Router<AppState> {
    Router::new().route("/create-payment-intent", post(create_payment_intent))
}

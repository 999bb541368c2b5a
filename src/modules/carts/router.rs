use axum::{
    Router,
    routing::{delete, get},
};

use crate::modules::carts::controller::{add_cart_item, delete_cart_item, get_cart_items};
use crate::state::AppState;

pub fn init_carts_router() -> Router<AppState> {
    Router::new()
        .route("/carts", get(get_cart_items).post(add_cart_item))
        .route("/carts/{id}", delete(delete_cart_item))
}

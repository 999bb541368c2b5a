use axum::{Router, routing::get};

use crate::modules::catalog::controller::{
    get_classes, get_instructors, get_popular_classes, get_popular_instructors,
};
use crate::state::AppState;

pub fn init_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/classes", get(get_classes))
        .route("/classes/popular", get(get_popular_classes))
        .route("/instructors", get(get_instructors))
        .route("/instructors/popular", get(get_popular_instructors))
}

use axum::{
    Router,
    routing::{delete, get},
};

use crate::modules::users::controller::{
    check_admin, check_instructor, delete_user, get_users, promote_to_admin,
    promote_to_instructor, signup,
};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users).post(signup))
        .route("/users/admin/{key}", get(check_admin).patch(promote_to_admin))
        .route(
            "/users/instructor/{key}",
            get(check_instructor).patch(promote_to_instructor),
        )
        .route("/users/{id}", delete(delete_user))
}

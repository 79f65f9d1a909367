//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// ```text
/// POST   /users/                 -> create
/// GET    /users/{project_id}     -> list_by_project
/// GET    /users/id/{user_id}     -> get_by_id
/// PUT    /users/id/{user_id}     -> update
/// DELETE /users/id/{user_id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/", post(user::create))
        .route("/users/{project_id}", get(user::list_by_project))
        .route(
            "/users/id/{user_id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
}

//! Route definitions for the `/projects` resource.
//!
//! Membership routes live under `/projects/{project_id}/users/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{membership, project};
use crate::state::AppState;

/// ```text
/// POST   /projects/                              -> project::create
/// GET    /projects/{project_id}                  -> project::get_by_id
/// PUT    /projects/{project_id}                  -> project::update
/// DELETE /projects/{project_id}                  -> project::delete
///
/// GET    /projects/{project_id}/users            -> membership::list_users
/// POST   /projects/{project_id}/users/{user_id}  -> membership::add
/// GET    /projects/{project_id}/users/{user_id}  -> membership::get
/// DELETE /projects/{project_id}/users/{user_id}  -> membership::remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects/", post(project::create))
        .route(
            "/projects/{project_id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route(
            "/projects/{project_id}/users",
            get(membership::list_users),
        )
        .route(
            "/projects/{project_id}/users/{user_id}",
            post(membership::add)
                .get(membership::get)
                .delete(membership::remove),
        )
}

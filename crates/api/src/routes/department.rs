//! Route definitions for the `/departments` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::department;
use crate::state::AppState;

/// ```text
/// POST   /departments/        -> create
/// GET    /departments/{id}    -> get_by_id
/// PUT    /departments/{id}    -> update
/// DELETE /departments/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/departments/", post(department::create))
        .route(
            "/departments/{id}",
            get(department::get_by_id)
                .put(department::update)
                .delete(department::delete),
        )
}

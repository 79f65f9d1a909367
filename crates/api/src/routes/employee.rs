//! Route definitions for the `/employees` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// `GET` on `/employees/{id}` treats the segment as a department id; `PUT`
/// and `DELETE` treat it as an employee id.
///
/// ```text
/// POST   /employees/          -> create
/// GET    /employees/{id}      -> list_by_department
/// PUT    /employees/{id}      -> update
/// DELETE /employees/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employees/", post(employee::create))
        .route(
            "/employees/{id}",
            get(employee::list_by_department)
                .put(employee::update)
                .delete(employee::delete),
        )
}

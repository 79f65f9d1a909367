//! Route definitions for `/questions` and `/choices`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{choice, question};
use crate::state::AppState;

/// ```text
/// POST   /questions/          -> question::create
/// GET    /questions/{id}      -> question::get_by_id
/// PUT    /questions/{id}      -> question::update
/// DELETE /questions/{id}      -> question::delete
///
/// POST   /choices/            -> choice::create
/// GET    /choices/{id}        -> choice::get_by_id
/// PUT    /choices/{id}        -> choice::update
/// DELETE /choices/{id}        -> choice::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions/", post(question::create))
        .route(
            "/questions/{id}",
            get(question::get_by_id)
                .put(question::update)
                .delete(question::delete),
        )
        .route("/choices/", post(choice::create))
        .route(
            "/choices/{id}",
            get(choice::get_by_id)
                .put(choice::update)
                .delete(choice::delete),
        )
}

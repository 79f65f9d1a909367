pub mod department;
pub mod employee;
pub mod health;
pub mod project;
pub mod question;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the entity route tree, mounted at the root next to `/health`.
///
/// Route hierarchy:
///
/// ```text
/// /questions/                                 create
/// /questions/{id}                             get, update, delete
/// /choices/                                   create
/// /choices/{id}                               get, update, delete
///
/// /projects/                                  create
/// /projects/{project_id}                      get, update, delete
/// /projects/{project_id}/users                list members
/// /projects/{project_id}/users/{user_id}      add, get, remove membership
///
/// /users/                                     create
/// /users/{project_id}                         list by direct project
/// /users/id/{user_id}                         get, update, delete
///
/// /departments/                               create
/// /departments/{id}                           get, update, delete
/// /employees/                                 create
/// /employees/{id}                             list by department (GET),
///                                             update, delete (by employee id)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Questions and their choices.
        .merge(question::router())
        // Projects, users and membership.
        .merge(project::router())
        .merge(user::router())
        // Departments and employees.
        .merge(department::router())
        .merge(employee::router())
}

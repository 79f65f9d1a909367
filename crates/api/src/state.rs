/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and cloned per request. The pool is the only
/// handle to the store; each handler checks out its own connection or
/// transaction from it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tabula_db::DbPool,
}

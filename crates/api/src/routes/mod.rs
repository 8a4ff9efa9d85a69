pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /productos                     list, create
/// /productos/mas-vendidos        top-rated listing
/// /productos/{id}                detail with ratings
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/productos", product::router())
}

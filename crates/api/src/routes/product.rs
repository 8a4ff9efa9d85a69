//! Route definitions for the `/productos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/productos`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /mas-vendidos    -> list_top_rated
/// GET    /{id}            -> get_by_id
/// ```
///
/// The static `/mas-vendidos` segment takes precedence over `/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product::list).post(product::create))
        .route("/mas-vendidos", get(product::list_top_rated))
        .route("/{id}", get(product::get_by_id))
}

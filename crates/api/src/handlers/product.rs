//! Handlers for the `/productos` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tienda_core::error::CoreError;
use tienda_core::types::DbId;
use tienda_db::models::product::{Product, ProductDetail, ProductDraft, RatedProduct};
use tienda_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/productos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool)
        .await
        .map_err(AppError::storage("Error al obtener productos"))?;
    Ok(Json(products))
}

/// POST /api/productos
///
/// All seven fields are required. Validation happens before any query runs,
/// so a rejected payload never touches storage.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProductDraft>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let Json(draft) = payload?;
    let input = draft.validate()?;

    let product = ProductRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::storage("Error al crear producto"))?;

    tracing::info!(
        product_id = product.id,
        sku = %product.sku,
        "Product created",
    );

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/productos/mas-vendidos
pub async fn list_top_rated(State(state): State<AppState>) -> AppResult<Json<Vec<RatedProduct>>> {
    let products = ProductRepo::list_top_rated(&state.pool)
        .await
        .map_err(AppError::storage("Error al obtener productos más valorados"))?;
    Ok(Json(products))
}

/// GET /api/productos/{id}
///
/// The id is taken as raw text: anything that is not a valid id cannot
/// match a product and gets the same 404 as an unknown id.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ProductDetail>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Producto",
            id: raw_id.clone(),
        })
    };

    let id: DbId = raw_id.parse().map_err(|_| not_found())?;

    let row = ProductRepo::find_with_ratings(&state.pool, id)
        .await
        .map_err(AppError::storage("Error al obtener el producto"))?
        .ok_or_else(not_found)?;

    Ok(Json(ProductDetail::from(row)))
}

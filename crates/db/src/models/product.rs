//! Product entity model, DTOs and aggregated views.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use tienda_core::catalog::{
    require_price, require_stock, require_text, PLACEHOLDER_CHARACTERISTICS,
    PLACEHOLDER_PRESENTATIONS,
};
use tienda_core::error::CoreError;
use tienda_core::types::{DbId, Timestamp};

use crate::models::rating::Rating;

/// A product row from the `productos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub nombre: String,
    pub precio: f64,
    pub descripcion: String,
    pub imagen: String,
    pub stock: i32,
    pub sku: String,
    pub categoria: String,
    pub creado_en: Timestamp,
}

/// Raw create payload as sent by clients.
///
/// Every field is optional here so that a missing field is reported as a
/// validation error naming it. Call [`ProductDraft::validate`] to obtain a
/// [`CreateProduct`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDraft {
    pub nombre: Option<String>,
    pub precio: Option<f64>,
    pub descripcion: Option<String>,
    #[serde(alias = "image")]
    pub imagen: Option<String>,
    pub stock: Option<i32>,
    pub sku: Option<String>,
    pub categoria: Option<String>,
}

impl ProductDraft {
    /// Check that all seven fields are present and well formed.
    pub fn validate(&self) -> Result<CreateProduct, CoreError> {
        Ok(CreateProduct {
            nombre: require_text("nombre", self.nombre.as_deref())?,
            precio: require_price("precio", self.precio)?,
            descripcion: require_text("descripcion", self.descripcion.as_deref())?,
            imagen: require_text("imagen", self.imagen.as_deref())?,
            stock: require_stock("stock", self.stock)?,
            sku: require_text("sku", self.sku.as_deref())?,
            categoria: require_text("categoria", self.categoria.as_deref())?,
        })
    }
}

/// Validated DTO for inserting a product.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub nombre: String,
    pub precio: f64,
    pub descripcion: String,
    pub imagen: String,
    pub stock: i32,
    pub sku: String,
    pub categoria: String,
}

/// A product annotated with its rating aggregates (top-rated listing).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RatedProduct {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub product: Product,
    /// Average score, 0.0 if no ratings.
    pub valoracion_promedio: f64,
    /// Number of ratings.
    pub total_valoraciones: i64,
}

/// A product with aggregates and every rating, as returned by the detail query.
#[derive(Debug, Clone, FromRow)]
pub struct ProductWithRatings {
    #[sqlx(flatten)]
    pub product: Product,
    pub valoracion_promedio: f64,
    pub total_valoraciones: i64,
    pub valoraciones: Json<Vec<Rating>>,
}

/// Response shape for `GET /api/productos/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub id: DbId,
    pub nombre: String,
    pub precio: f64,
    pub descripcion: String,
    pub imagen: String,
    pub stock: i32,
    pub sku: String,
    pub categoria: String,
    /// Placeholder, identical for every product.
    pub presentaciones: &'static [&'static str],
    /// Placeholder, identical for every product.
    pub caracteristicas: &'static [&'static str],
    pub valoracion_promedio: f64,
    pub total_valoraciones: i64,
    pub valoraciones: Vec<Rating>,
}

impl From<ProductWithRatings> for ProductDetail {
    fn from(row: ProductWithRatings) -> Self {
        let Product {
            id,
            nombre,
            precio,
            descripcion,
            imagen,
            stock,
            sku,
            categoria,
            creado_en: _,
        } = row.product;

        Self {
            id,
            nombre,
            precio,
            descripcion,
            imagen,
            stock,
            sku,
            categoria,
            presentaciones: PLACEHOLDER_PRESENTATIONS,
            caracteristicas: PLACEHOLDER_CHARACTERISTICS,
            valoracion_promedio: row.valoracion_promedio,
            total_valoraciones: row.total_valoraciones,
            valoraciones: row.valoraciones.0,
        }
    }
}

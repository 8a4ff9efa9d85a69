//! Repository for the `productos` table and its `valoraciones` aggregates.

use sqlx::PgPool;
use tienda_core::catalog::TOP_RATED_LIMIT;
use tienda_core::types::DbId;

use crate::models::product::{CreateProduct, Product, ProductWithRatings, RatedProduct};

/// Column list shared across single-table queries.
///
/// `precio` is NUMERIC in storage and surfaced as `float8`.
const COLUMNS: &str =
    "id, nombre, precio::float8 AS precio, descripcion, imagen, stock, sku, categoria, creado_en";

/// Same columns qualified with the `p` alias, for queries joining `valoraciones`.
const P_COLUMNS: &str = "p.id, p.nombre, p.precio::float8 AS precio, p.descripcion, p.imagen, \
     p.stock, p.sku, p.categoria, p.creado_en";

/// Provides the catalog's read and insert operations.
pub struct ProductRepo;

impl ProductRepo {
    /// List every product in storage order. No filtering, no pagination.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productos");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Insert a new product, returning the created row with its generated
    /// `id` and `creado_en`.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO productos (nombre, precio, descripcion, imagen, stock, sku, categoria)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.nombre)
            .bind(input.precio)
            .bind(&input.descripcion)
            .bind(&input.imagen)
            .bind(input.stock)
            .bind(&input.sku)
            .bind(&input.categoria)
            .fetch_one(pool)
            .await
    }

    /// The best-rated products, at most [`TOP_RATED_LIMIT`] rows.
    ///
    /// Products without ratings rank with an average and count of 0. Ordered
    /// by average descending, then rating count descending, then id.
    pub async fn list_top_rated(pool: &PgPool) -> Result<Vec<RatedProduct>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS}, \
                COALESCE(AVG(v.calificacion), 0)::float8 AS valoracion_promedio, \
                COUNT(v.id) AS total_valoraciones \
             FROM productos p \
             LEFT JOIN valoraciones v ON v.producto_id = p.id \
             GROUP BY p.id \
             ORDER BY valoracion_promedio DESC, total_valoraciones DESC, p.id ASC \
             LIMIT $1"
        );
        sqlx::query_as::<_, RatedProduct>(&query)
            .bind(TOP_RATED_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Fetch one product with its rating aggregates and every rating, in a
    /// single round trip.
    ///
    /// The `FILTER` clause drops the all-NULL row the left join produces for
    /// a product without ratings, so `valoraciones` is `[]` rather than
    /// `[null]`. Returns `None` if no product has the given `id`.
    pub async fn find_with_ratings(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProductWithRatings>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS}, \
                COALESCE(AVG(v.calificacion), 0)::float8 AS valoracion_promedio, \
                COUNT(v.id) AS total_valoraciones, \
                COALESCE( \
                    json_agg( \
                        json_build_object( \
                            'id', v.id, \
                            'usuario', v.usuario, \
                            'comentario', v.comentario, \
                            'calificacion', v.calificacion, \
                            'fecha', v.fecha \
                        ) ORDER BY v.fecha DESC, v.id DESC \
                    ) FILTER (WHERE v.id IS NOT NULL), \
                    '[]'::json \
                ) AS valoraciones \
             FROM productos p \
             LEFT JOIN valoraciones v ON v.producto_id = p.id \
             WHERE p.id = $1 \
             GROUP BY p.id"
        );
        sqlx::query_as::<_, ProductWithRatings>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

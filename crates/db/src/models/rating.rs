//! Rating entries as embedded in the product detail view.

use serde::{Deserialize, Serialize};
use tienda_core::types::{DbId, Timestamp};

/// One row of the `valoraciones` table, as aggregated by `json_agg`.
///
/// Ratings are written by an external process; this service only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: DbId,
    pub usuario: String,
    pub comentario: Option<String>,
    pub calificacion: i32,
    pub fecha: Timestamp,
}

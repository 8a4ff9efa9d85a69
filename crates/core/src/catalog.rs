//! Product catalog rules.
//!
//! Field-level validation for product creation and the static content that
//! the product detail view attaches to every product.

use crate::error::CoreError;

/// Number of rows returned by the top-rated listing.
pub const TOP_RATED_LIMIT: i64 = 10;

/// Placeholder presentation list shown on every product detail.
///
/// Not stored per product yet; every product reports the same value.
pub const PLACEHOLDER_PRESENTATIONS: &[&str] = &["Barra x 80g"];

/// Placeholder characteristics shown on every product detail.
///
/// Not stored per product yet; every product reports the same value.
pub const PLACEHOLDER_CHARACTERISTICS: &[&str] = &[
    "Jabón elaborado a base de componentes naturales",
    "Extracto de aloe vera",
    "Ácido láctico",
    "Ácido glicólico",
    "Vitamina E",
];

/// Require a text field to be present and not blank.
///
/// Returns the trimmed value.
pub fn require_text(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        Some(_) => Err(CoreError::Validation(format!(
            "El campo '{field}' no puede estar vacío"
        ))),
        None => Err(missing(field)),
    }
}

/// Largest price the `NUMERIC(12, 2)` column can hold.
pub const MAX_PRICE: f64 = 9_999_999_999.99;

/// Slack, in cents, for binary floating point when checking the scale.
const CENT_TOLERANCE: f64 = 1e-3;

/// Require a price to be present, finite, non-negative, at most
/// [`MAX_PRICE`] and with no more than two decimals. Zero is allowed.
pub fn require_price(field: &str, value: Option<f64>) -> Result<f64, CoreError> {
    let price = value.ok_or_else(|| missing(field))?;
    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::Validation(format!(
            "El campo '{field}' debe ser un número mayor o igual a 0"
        )));
    }
    if price > MAX_PRICE {
        return Err(CoreError::Validation(format!(
            "El campo '{field}' no puede superar {MAX_PRICE:.2}"
        )));
    }
    let cents = price * 100.0;
    if (cents - cents.round()).abs() > CENT_TOLERANCE {
        return Err(CoreError::Validation(format!(
            "El campo '{field}' admite como máximo dos decimales"
        )));
    }
    Ok(price)
}

/// Require a stock quantity to be present and non-negative. Zero is allowed.
pub fn require_stock(field: &str, value: Option<i32>) -> Result<i32, CoreError> {
    let stock = value.ok_or_else(|| missing(field))?;
    if stock < 0 {
        return Err(CoreError::Validation(format!(
            "El campo '{field}' debe ser un entero mayor o igual a 0"
        )));
    }
    Ok(stock)
}

fn missing(field: &str) -> CoreError {
    CoreError::Validation(format!("Falta el campo obligatorio '{field}'"))
}

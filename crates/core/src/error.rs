#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is kept as the raw identifier the caller supplied, which may not
    /// even be numeric.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

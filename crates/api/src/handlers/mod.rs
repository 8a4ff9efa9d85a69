//! Request handlers.
//!
//! Handlers delegate to the repositories in `tienda_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod product;

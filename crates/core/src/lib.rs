//! Domain building blocks shared by the database and HTTP layers.

pub mod catalog;
pub mod error;
pub mod types;

//! Row structs and DTOs.
//!
//! - `FromRow` + `Serialize` structs matching query results
//! - `Deserialize` input DTOs for inserts

pub mod product;
pub mod rating;

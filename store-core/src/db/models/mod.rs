//! Database models
//!
//! Server-side document types. Record ids follow the `table:id`
//! convention and use `surrealdb::RecordId` throughout.

pub mod order;
pub mod product;

// Re-exports
pub use order::*;
pub use product::*;

//! Cart consolidation
//!
//! Keeps a cart's line items merged and deduplicated by identity key
//! (product, size, variant) and the derived totals consistent with the
//! items. The rules live in [`consolidator`] as pure functions over the
//! cart document; [`CartService`] wraps them with persistence.

pub mod consolidator;
pub mod error;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::CartError;
pub use service::CartService;

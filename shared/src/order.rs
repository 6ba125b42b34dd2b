//! Order snapshot types
//!
//! Order lines are an immutable copy of the purchased cart lines taken
//! at checkout time. They are never re-derived from the live product;
//! later catalog edits do not touch placed orders.

use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Placed,
    Delivered,
    Cancelled,
}

/// A purchased line item, snapshotted at checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product ID at purchase time
    pub product_id: String,
    /// Product name at purchase time
    pub name: String,
    /// Unit price actually charged (offer price if one applied)
    pub price: f64,
    /// Quantity purchased
    pub quantity: i32,
    /// Purchased size
    pub size: String,
}

//! Cart document and line items
//!
//! A cart line is identified by the (product_id, size, variant_id)
//! tuple. The cart holds at most one line per identity, and the derived
//! `total` / `item_count` fields are recomputed by the consolidator
//! whenever `items` changes; they are never updated independently.

use serde::{Deserialize, Serialize};

/// A single cart line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product ID
    pub product_id: String,
    /// Product name
    pub name: String,
    /// Regular price
    pub price: f64,
    /// Promotional price, preferred over `price` when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_price: Option<f64>,
    /// Quantity (> 0)
    pub quantity: i32,
    /// Selected size
    pub size: String,
    /// Product image URL
    #[serde(default)]
    pub image: String,
    /// Stock snapshot taken when the line was last merged; acts as the
    /// quantity ceiling for merges
    pub stock: i32,
    /// Variant reference (colour, material, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    /// Variant display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
    /// Variant type (e.g. "color")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_type: Option<String>,
}

impl CartItem {
    /// Whether this line matches the given identity key
    pub fn matches_line(&self, product_id: &str, size: &str, variant_id: Option<&str>) -> bool {
        self.product_id == product_id && self.size == size && self.variant_id.as_deref() == variant_id
    }

    /// Whether two lines share the same identity key
    pub fn same_identity(&self, other: &CartItem) -> bool {
        self.matches_line(&other.product_id, &other.size, other.variant_id.as_deref())
    }
}

/// Cart document. One per user, stored whole in the `cart` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Owning user
    pub user_id: String,
    /// Line items, at most one per identity key
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Derived: sum of line totals (offer price preferred)
    #[serde(default)]
    pub total: f64,
    /// Derived: sum of line quantities
    #[serde(default)]
    pub item_count: i32,
    /// Last mutation timestamp (Unix millis)
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart for a user
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            items: Vec::new(),
            total: 0.0,
            item_count: 0,
            updated_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Whether the cart holds no lines
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the line matching the identity key, if any
    pub fn find_line(&self, product_id: &str, size: &str, variant_id: Option<&str>) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.matches_line(product_id, size, variant_id))
    }
}

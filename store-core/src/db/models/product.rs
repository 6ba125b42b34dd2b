//! Product Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type ProductId = RecordId;

/// Per-size stock ledger entry
///
/// `size_stocks` is the source of truth; the product's aggregate
/// `stock` field is the cached sum of these entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SizeStock {
    pub size: String,
    pub stock: i32,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Category name (e.g. "Men", "Kids")
    #[serde(default)]
    pub category: String,
    pub price: f64,
    /// Promotional price, preferred over `price` at checkout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_price: Option<f64>,
    #[serde(default)]
    pub image: String,
    /// Per-size stock, one entry per declared size
    pub size_stocks: Vec<SizeStock>,
    /// Cached aggregate; always equals the sum of `size_stocks[].stock`
    pub stock: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Sum of the per-size ledger, what the cached `stock` must equal
    pub fn aggregate_stock(&self) -> i32 {
        self.size_stocks.iter().map(|s| s.stock).sum()
    }

    /// Stock for a single size, if the size is declared
    pub fn stock_for_size(&self, size: &str) -> Option<i32> {
        self.size_stocks
            .iter()
            .find(|s| s.size == size)
            .map(|s| s.stock)
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: f64,
    pub offer_price: Option<f64>,
    pub image: Option<String>,
    pub size_stocks: Vec<SizeStock>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub offer_price: Option<f64>,
    pub image: Option<String>,
    /// Replaces the whole per-size ledger; the aggregate is recomputed
    pub size_stocks: Option<Vec<SizeStock>>,
    pub is_active: Option<bool>,
}

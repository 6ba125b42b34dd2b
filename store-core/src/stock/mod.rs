//! Stock reconciliation
//!
//! Applies a placed order's line items against a product's size-indexed
//! stock. The per-size ledger (`size_stocks`) is the source of truth;
//! the product's aggregate `stock` is recomputed as the sum of the
//! ledger after every decrement, so
//! `product.stock == Σ size_stocks[].stock` holds after each write.
//!
//! Writes go through a guarded conditional update: the ledger and the
//! aggregate are written together in one statement, conditional on the
//! ledger still holding the value that was read. A concurrent writer
//! makes the guard miss, in which case the read-modify-write is
//! retried; decrements therefore serialize per document instead of
//! losing updates.

pub mod error;

pub use error::StockError;

use tracing::{info, warn};

use crate::core::Config;
use crate::db::DbService;
use crate::db::models::{Product, SizeStock};
use crate::db::repository::ProductRepository;
use shared::OrderLine;

/// Default retry budget for contended stock updates
const DEFAULT_MAX_RETRIES: u32 = 5;

/// Replacement ledger and aggregate after decrementing one size
///
/// Returns `None` when the product declares no entry for `size`. The
/// decrement floors at zero; over-decrement is not an error and raises
/// no backorder signal.
pub fn decrement(size_stocks: &[SizeStock], size: &str, quantity: i32) -> Option<(Vec<SizeStock>, i32)> {
    let idx = size_stocks.iter().position(|entry| entry.size == size)?;
    let mut next = size_stocks.to_vec();
    next[idx].stock = (next[idx].stock - quantity).max(0);
    let total = next.iter().map(|entry| entry.stock).sum();
    Some((next, total))
}

#[derive(Clone)]
pub struct StockReconciler {
    products: ProductRepository,
    max_retries: u32,
}

impl StockReconciler {
    pub fn new(db: &DbService) -> Self {
        Self {
            products: ProductRepository::new(db.db().clone()),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Build a reconciler with the configured retry budget
    pub fn from_config(db: &DbService, config: &Config) -> Self {
        Self {
            products: ProductRepository::new(db.db().clone()),
            max_retries: config.stock_max_retries,
        }
    }

    /// Decrement one size's stock and refresh the cached aggregate
    ///
    /// Returns the product as persisted. A size the product does not
    /// declare is tolerated: the product is returned unchanged and
    /// nothing is written.
    pub async fn reduce_stock(
        &self,
        product_id: &str,
        size: &str,
        quantity: i32,
    ) -> Result<Product, StockError> {
        if quantity <= 0 {
            return Err(StockError::InvalidQuantity(quantity));
        }

        for attempt in 0..self.max_retries {
            let product = self
                .products
                .find_by_id(product_id)
                .await?
                .ok_or_else(|| StockError::ProductNotFound(product_id.to_string()))?;

            let Some((next, total)) = decrement(&product.size_stocks, size, quantity) else {
                warn!(product_id, size, "no matching size-stock entry, skipping decrement");
                return Ok(product);
            };

            let id = product
                .id
                .clone()
                .ok_or_else(|| StockError::ProductNotFound(product_id.to_string()))?;

            match self
                .products
                .update_stocks_guarded(&id, &product.size_stocks, next, total)
                .await?
            {
                Some(updated) => {
                    info!(
                        product_id,
                        size,
                        quantity,
                        stock = updated.stock,
                        "stock reduced"
                    );
                    return Ok(updated);
                }
                None => {
                    warn!(product_id, size, attempt, "concurrent stock update, retrying");
                }
            }
        }

        Err(StockError::Conflict(product_id.to_string()))
    }

    /// Apply every line of a placed order, failing fast on the first error
    pub async fn reduce_for_order(&self, items: &[OrderLine]) -> Result<(), StockError> {
        for line in items {
            self.reduce_stock(&line.product_id, &line.size, line.quantity)
                .await?;
        }
        Ok(())
    }
}

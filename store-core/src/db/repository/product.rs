//! Product Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Product, ProductCreate, ProductId, ProductUpdate, SizeStock};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const PRODUCT_TABLE: &str = "product";

// =============================================================================
// Product Repository
// =============================================================================

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all active products
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE is_active = true ORDER BY name")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let record_id = parse_record_id(PRODUCT_TABLE, id);
        let product: Option<Product> = self.base.db().select(record_id).await?;
        Ok(product)
    }

    /// Create a new product
    ///
    /// The aggregate `stock` is computed from the per-size ledger at
    /// creation; it is never accepted from the caller.
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        if data.size_stocks.is_empty() {
            return Err(RepoError::Validation("size_stocks cannot be empty".into()));
        }
        for entry in &data.size_stocks {
            if entry.stock < 0 {
                return Err(RepoError::Validation(format!(
                    "negative stock for size {}",
                    entry.size
                )));
            }
        }
        let mut seen = std::collections::HashSet::new();
        for entry in &data.size_stocks {
            if !seen.insert(entry.size.as_str()) {
                return Err(RepoError::Validation(format!(
                    "duplicate size entry: {}",
                    entry.size
                )));
            }
        }
        if !data.price.is_finite() || data.price < 0.0 {
            return Err(RepoError::Validation("price must be non-negative".into()));
        }

        let stock = data.size_stocks.iter().map(|s| s.stock).sum();
        let product = Product {
            id: None,
            name: data.name,
            description: data.description.unwrap_or_default(),
            category: data.category.unwrap_or_default(),
            price: data.price,
            offer_price: data.offer_price,
            image: data.image.unwrap_or_default(),
            size_stocks: data.size_stocks,
            stock,
            is_active: true,
            created_at: chrono::Utc::now().timestamp_millis(),
        };

        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Update a product
    ///
    /// Whole-document read-modify-write. When `size_stocks` is replaced
    /// the aggregate is recomputed so `stock` stays the sum of the
    /// ledger.
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let mut product = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {}", id)))?;

        if let Some(name) = data.name {
            product.name = name;
        }
        if let Some(description) = data.description {
            product.description = description;
        }
        if let Some(category) = data.category {
            product.category = category;
        }
        if let Some(price) = data.price {
            if !price.is_finite() || price < 0.0 {
                return Err(RepoError::Validation("price must be non-negative".into()));
            }
            product.price = price;
        }
        if let Some(offer_price) = data.offer_price {
            product.offer_price = Some(offer_price);
        }
        if let Some(image) = data.image {
            product.image = image;
        }
        if let Some(size_stocks) = data.size_stocks {
            if size_stocks.is_empty() {
                return Err(RepoError::Validation("size_stocks cannot be empty".into()));
            }
            product.stock = size_stocks.iter().map(|s| s.stock).sum();
            product.size_stocks = size_stocks;
        }
        if let Some(is_active) = data.is_active {
            product.is_active = is_active;
        }

        let record_id = parse_record_id(PRODUCT_TABLE, id);
        // The record id is fixed by the target; never resend it in content
        product.id = None;
        let updated: Option<Product> = self
            .base
            .db()
            .update(record_id)
            .content(product)
            .await?;

        updated.ok_or_else(|| RepoError::NotFound(format!("Product {}", id)))
    }

    /// Soft-delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let product = self.update(
            id,
            ProductUpdate {
                name: None,
                description: None,
                category: None,
                price: None,
                offer_price: None,
                image: None,
                size_stocks: None,
                is_active: Some(false),
            },
        )
        .await?;
        Ok(!product.is_active)
    }

    /// Guarded stock write used by the reconciler
    ///
    /// Writes the replacement ledger and its aggregate in ONE update,
    /// conditional on the ledger still holding the value the caller
    /// read. Returns `None` when the guard missed (concurrent writer);
    /// the caller re-reads and retries.
    pub async fn update_stocks_guarded(
        &self,
        id: &ProductId,
        expected: &[SizeStock],
        next: Vec<SizeStock>,
        total: i32,
    ) -> RepoResult<Option<Product>> {
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $id SET size_stocks = $next, stock = $total \
                 WHERE size_stocks = $expected RETURN AFTER",
            )
            .bind(("id", id.clone()))
            .bind(("next", next))
            .bind(("total", total))
            .bind(("expected", expected.to_vec()))
            .await?;
        let updated: Vec<Product> = result.take(0)?;
        Ok(updated.into_iter().next())
    }
}

//! Cart Repository
//!
//! One cart document per user, keyed by user id. Documents are read and
//! written whole; the consolidator owns the line-merging rules.

use super::{BaseRepository, RepoError, RepoResult};
use shared::Cart;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const CART_TABLE: &str = "cart";

#[derive(Clone)]
pub struct CartRepository {
    base: BaseRepository,
}

impl CartRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Load a user's cart document, if one exists
    pub async fn find_by_user(&self, user_id: &str) -> RepoResult<Option<Cart>> {
        let cart: Option<Cart> = self.base.db().select((CART_TABLE, user_id)).await?;
        Ok(cart)
    }

    /// Persist the whole cart document for its owning user
    pub async fn save(&self, cart: &Cart) -> RepoResult<Cart> {
        let saved: Option<Cart> = self
            .base
            .db()
            .upsert((CART_TABLE, cart.user_id.as_str()))
            .content(cart.clone())
            .await?;
        saved.ok_or_else(|| RepoError::Database("Failed to save cart".to_string()))
    }
}

//! Cart Service
//!
//! Repository-backed wrapper around the consolidator: load the user's
//! cart document (creating it implicitly on first add), apply the
//! mutation, persist the whole document back.

use shared::{Cart, CartItem};
use tracing::info;

use super::consolidator;
use crate::db::DbService;
use crate::db::repository::CartRepository;
use crate::utils::AppResult;

#[derive(Clone)]
pub struct CartService {
    carts: CartRepository,
}

impl CartService {
    pub fn new(db: &DbService) -> Self {
        Self {
            carts: CartRepository::new(db.db().clone()),
        }
    }

    /// The user's cart, or an empty (not yet persisted) one
    pub async fn get_cart(&self, user_id: &str) -> AppResult<Cart> {
        let cart = self.carts.find_by_user(user_id).await?;
        Ok(cart.unwrap_or_else(|| Cart::new(user_id)))
    }

    /// Add a line to the user's cart, merging by identity key
    pub async fn add_item(&self, user_id: &str, item: CartItem) -> AppResult<Cart> {
        let mut cart = self.get_cart(user_id).await?;
        consolidator::add_item(&mut cart, item)?;
        let saved = self.carts.save(&cart).await?;
        info!(user_id, item_count = saved.item_count, "cart updated");
        Ok(saved)
    }

    /// Set a line's quantity; non-positive removes the line
    pub async fn update_quantity(
        &self,
        user_id: &str,
        product_id: &str,
        size: &str,
        variant_id: Option<&str>,
        quantity: i32,
    ) -> AppResult<Cart> {
        let mut cart = self.get_cart(user_id).await?;
        consolidator::update_quantity(&mut cart, product_id, size, variant_id, quantity)?;
        Ok(self.carts.save(&cart).await?)
    }

    /// Remove a line; no-op when the line is absent
    pub async fn remove_item(
        &self,
        user_id: &str,
        product_id: &str,
        size: &str,
        variant_id: Option<&str>,
    ) -> AppResult<Cart> {
        let mut cart = self.get_cart(user_id).await?;
        consolidator::remove_item(&mut cart, product_id, size, variant_id);
        Ok(self.carts.save(&cart).await?)
    }

    /// Empty the cart; the document is kept
    pub async fn clear(&self, user_id: &str) -> AppResult<Cart> {
        let mut cart = self.get_cart(user_id).await?;
        consolidator::clear(&mut cart);
        Ok(self.carts.save(&cart).await?)
    }
}

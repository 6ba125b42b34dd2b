//! Order placement
//!
//! Runs after the (out-of-scope) payment confirmation: snapshot the
//! cart lines into an immutable order, decrement stock once per line,
//! then clear the cart. The cart document is kept, only emptied.
//!
//! There is no compensation path: a stock decrement failure surfaces to
//! the caller with the order already written.

use rust_decimal::Decimal;
use tracing::info;

use crate::cart::consolidator;
use crate::db::DbService;
use crate::db::models::Order;
use crate::db::repository::{CartRepository, OrderRepository};
use crate::stock::StockReconciler;
use crate::utils::{AppError, AppResult};
use shared::OrderLine;

#[derive(Clone)]
pub struct CheckoutService {
    carts: CartRepository,
    orders: OrderRepository,
    reconciler: StockReconciler,
}

impl CheckoutService {
    pub fn new(db: &DbService) -> Self {
        Self {
            carts: CartRepository::new(db.db().clone()),
            orders: OrderRepository::new(db.db().clone()),
            reconciler: StockReconciler::new(db),
        }
    }

    /// Place an order from the user's current cart
    ///
    /// The order lines are a snapshot: unit price is the offer price
    /// when one applies, and later catalog edits never touch them.
    pub async fn place_order(&self, user_id: &str) -> AppResult<Order> {
        let mut cart = self
            .carts
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::validation("Cart is empty"))?;
        if cart.is_empty() {
            return Err(AppError::validation("Cart is empty"));
        }

        let items: Vec<OrderLine> = cart
            .items
            .iter()
            .map(|line| OrderLine {
                product_id: line.product_id.clone(),
                name: line.name.clone(),
                price: consolidator::effective_price(line),
                quantity: line.quantity,
                size: line.size.clone(),
            })
            .collect();

        let total = consolidator::to_f64(
            items
                .iter()
                .map(|line| consolidator::to_decimal(line.price) * Decimal::from(line.quantity))
                .sum::<Decimal>(),
        );

        let order = self.orders.create(Order::new(user_id, items, total)).await?;

        self.reconciler.reduce_for_order(&order.items).await?;

        // Cleared, not deleted - the document stays for the next visit
        consolidator::clear(&mut cart);
        self.carts.save(&cart).await?;

        let order_id = order.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
        info!(user_id, order_id = %order_id, total = order.total, "order placed");

        Ok(order)
    }
}

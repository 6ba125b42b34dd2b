//! Order Repository
//!
//! Orders are written once at checkout and only their status changes
//! afterwards; the line snapshot is immutable.

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::Order;
use shared::OrderStatus;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const ORDER_TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a freshly placed order
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let record_id = parse_record_id(ORDER_TABLE, id);
        let order: Option<Order> = self.base.db().select(record_id).await?;
        Ok(order)
    }

    /// All orders for a user, newest first
    pub async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order WHERE user_id = $user ORDER BY created_at DESC")
            .bind(("user", user_id.to_string()))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Update an order's status; the item snapshot is never touched
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let mut order = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {}", id)))?;
        order.status = status;
        order.id = None;

        let record_id = parse_record_id(ORDER_TABLE, id);
        let updated: Option<Order> = self.base.db().update(record_id).content(order).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Order {}", id)))
    }
}

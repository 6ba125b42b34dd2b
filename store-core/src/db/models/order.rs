//! Order Model

use serde::{Deserialize, Serialize};
use shared::{OrderLine, OrderStatus};
use surrealdb::RecordId;

pub type OrderId = RecordId;

/// Order document
///
/// `items` is the snapshot taken at checkout; it is written once and
/// never updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    pub user_id: String,
    pub items: Vec<OrderLine>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: i64,
}

impl Order {
    /// Create a new order in the `Placed` state
    pub fn new(user_id: impl Into<String>, items: Vec<OrderLine>, total: f64) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            items,
            total,
            status: OrderStatus::Placed,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

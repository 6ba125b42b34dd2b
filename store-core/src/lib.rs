//! Storefront Core - data-consistency layer of the storefront backend
//!
//! # Architecture Overview
//!
//! This crate holds the two components of the storefront that carry real
//! invariants, plus the plumbing they need:
//!
//! - **Cart consolidation** (`cart`): merge/dedup of cart lines by
//!   identity key and recomputation of the derived totals
//! - **Stock reconciliation** (`stock`): size-indexed stock decrement
//!   with the cached aggregate kept consistent
//! - **Checkout** (`checkout`): order placement - snapshot, decrement,
//!   clear cart
//! - **Database** (`db`): embedded SurrealDB document store and
//!   whole-document repositories
//!
//! The HTTP layer, authentication and payment confirmation live outside
//! this crate; services take an already-verified `user_id`.
//!
//! # Module Structure
//!
//! ```text
//! store-core/src/
//! ├── core/          # Configuration
//! ├── cart/          # Cart consolidation + CartService
//! ├── stock/         # Stock reconciliation
//! ├── checkout/      # Order placement
//! ├── db/            # Database layer (models, repositories)
//! └── utils/         # Errors, logging
//! ```

pub mod cart;
pub mod checkout;
pub mod core;
pub mod db;
pub mod stock;
pub mod utils;

// Re-export public types
pub use crate::core::Config;
pub use cart::CartService;
pub use checkout::CheckoutService;
pub use db::DbService;
pub use stock::StockReconciler;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Re-export the shared model types consumed through this crate
pub use shared::{Cart, CartItem, OrderLine, OrderStatus};

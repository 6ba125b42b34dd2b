//! Shared types for the storefront core
//!
//! Model types exchanged between the storefront client, the admin
//! back-office and the server: cart documents and their line items,
//! and the immutable order snapshot taken at checkout.

pub mod cart;
pub mod order;

// Re-exports
pub use cart::{Cart, CartItem};
pub use order::{OrderLine, OrderStatus};
pub use serde::{Deserialize, Serialize};

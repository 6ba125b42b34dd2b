//! Cart line merging and derived totals
//!
//! All monetary arithmetic is done with `Decimal` internally and
//! converted to `f64` for storage/serialization, matching the rest of
//! the stack. No display rounding happens here; formatting is a
//! presentation concern.
//!
//! Merge ceiling semantics: when a line is merged, the INCOMING item's
//! `stock` snapshot is the clamp bound, even if a previous merge saw a
//! different value. Last write wins for the ceiling; merges never
//! accumulate a min() of earlier snapshots.

use rust_decimal::prelude::*;
use shared::{Cart, CartItem};
use tracing::debug;

use super::error::CartError;

/// Maximum allowed price per item
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
const MAX_QUANTITY: i32 = 9999;

/// Convert f64 to Decimal for precise arithmetic
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage
///
/// No display rounding; totals carry whatever precision the line
/// prices had.
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Validate a line item before it enters the cart
fn validate_item(item: &CartItem) -> Result<(), CartError> {
    if item.quantity <= 0 {
        return Err(CartError::InvalidQuantity(format!(
            "quantity must be positive, got {}",
            item.quantity
        )));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(CartError::InvalidQuantity(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.quantity
        )));
    }
    if !item.price.is_finite() || item.price < 0.0 {
        return Err(CartError::InvalidQuantity(format!(
            "price must be a non-negative finite number, got {}",
            item.price
        )));
    }
    if item.price > MAX_PRICE {
        return Err(CartError::InvalidQuantity(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, item.price
        )));
    }
    if let Some(op) = item.offer_price {
        if !op.is_finite() || op < 0.0 {
            return Err(CartError::InvalidQuantity(format!(
                "offer price must be a non-negative finite number, got {}",
                op
            )));
        }
    }
    Ok(())
}

/// Add a line to the cart, merging with an existing line of the same
/// identity key
///
/// A merge clamps the summed quantity to the incoming item's `stock`
/// snapshot and refreshes the stored snapshot to that value. A fresh
/// line is clamped the same way. An add whose stock snapshot is empty
/// is rejected outright on either path.
pub fn add_item(cart: &mut Cart, new_item: CartItem) -> Result<(), CartError> {
    validate_item(&new_item)?;
    if new_item.stock <= 0 {
        return Err(CartError::InvalidQuantity(format!(
            "product {} size {} is out of stock",
            new_item.product_id, new_item.size
        )));
    }

    match cart
        .items
        .iter_mut()
        .find(|line| line.same_identity(&new_item))
    {
        Some(line) => {
            let merged = (line.quantity + new_item.quantity).min(new_item.stock);
            debug!(
                product_id = %line.product_id,
                size = %line.size,
                merged,
                ceiling = new_item.stock,
                "merged cart line"
            );
            line.quantity = merged;
            line.stock = new_item.stock;
        }
        None => {
            let mut line = new_item;
            line.quantity = line.quantity.min(line.stock);
            cart.items.push(line);
        }
    }

    recompute_totals(cart);
    Ok(())
}

/// Set a line's quantity directly
///
/// A non-positive quantity behaves exactly like [`remove_item`]
/// (including the absent-line no-op). Otherwise the quantity is written
/// as given; this path deliberately applies no stock clamp, and the
/// snapshot ceiling only binds merges.
pub fn update_quantity(
    cart: &mut Cart,
    product_id: &str,
    size: &str,
    variant_id: Option<&str>,
    quantity: i32,
) -> Result<(), CartError> {
    if quantity <= 0 {
        remove_item(cart, product_id, size, variant_id);
        return Ok(());
    }

    let Some(idx) = cart.find_line(product_id, size, variant_id) else {
        return Err(CartError::ItemNotFound(format!(
            "product {} size {} variant {:?}",
            product_id, size, variant_id
        )));
    };
    cart.items[idx].quantity = quantity;

    recompute_totals(cart);
    Ok(())
}

/// Remove the line matching the identity key; no-op when absent
pub fn remove_item(cart: &mut Cart, product_id: &str, size: &str, variant_id: Option<&str>) {
    let before = cart.items.len();
    cart.items
        .retain(|line| !line.matches_line(product_id, size, variant_id));
    if cart.items.len() != before {
        recompute_totals(cart);
    }
}

/// Empty the cart and zero the derived fields
pub fn clear(cart: &mut Cart) {
    cart.items.clear();
    recompute_totals(cart);
}

/// Unit price actually charged for a line (offer price preferred)
pub fn effective_price(line: &CartItem) -> f64 {
    line.offer_price.unwrap_or(line.price)
}

/// Sum of line totals over the cart
pub fn total(cart: &Cart) -> f64 {
    let sum = cart
        .items
        .iter()
        .map(|line| to_decimal(effective_price(line)) * Decimal::from(line.quantity))
        .sum::<Decimal>();
    to_f64(sum)
}

/// Sum of line quantities over the cart
pub fn item_count(cart: &Cart) -> i32 {
    cart.items.iter().map(|line| line.quantity).sum()
}

/// Refresh the derived fields from the item set
///
/// Called after every mutation; `total`/`item_count` are never written
/// independently of `items`.
pub fn recompute_totals(cart: &mut Cart) {
    cart.total = total(cart);
    cart.item_count = item_count(cart);
    cart.updated_at = chrono::Utc::now().timestamp_millis();
}

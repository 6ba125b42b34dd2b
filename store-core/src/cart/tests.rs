use super::consolidator::*;
use super::error::CartError;
use shared::{Cart, CartItem};

fn item(product_id: &str, size: &str, quantity: i32, price: f64, stock: i32) -> CartItem {
    CartItem {
        product_id: product_id.to_string(),
        name: format!("Product {}", product_id),
        price,
        offer_price: None,
        quantity,
        size: size.to_string(),
        image: String::new(),
        stock,
        variant_id: None,
        variant_name: None,
        variant_type: None,
    }
}

fn item_with_variant(product_id: &str, size: &str, variant_id: &str, quantity: i32) -> CartItem {
    CartItem {
        variant_id: Some(variant_id.to_string()),
        variant_name: Some(format!("Variant {}", variant_id)),
        variant_type: Some("color".to_string()),
        ..item(product_id, size, quantity, 10.0, 50)
    }
}

#[test]
fn test_first_add_computes_totals() {
    let mut cart = Cart::new("user-1");
    add_item(&mut cart, item("P1", "M", 2, 100.0, 5)).unwrap();

    assert_eq!(cart.items.len(), 1);
    assert_eq!(total(&cart), 200.0);
    assert_eq!(item_count(&cart), 2);
    assert_eq!(cart.total, 200.0);
    assert_eq!(cart.item_count, 2);
}

#[test]
fn test_merge_clamps_to_stock() {
    // Spec example: qty 2 then qty 4 against stock 5 merges to 5
    let mut cart = Cart::new("user-1");
    add_item(&mut cart, item("P1", "M", 2, 100.0, 5)).unwrap();
    add_item(&mut cart, item("P1", "M", 4, 100.0, 5)).unwrap();

    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 5);
    assert_eq!(total(&cart), 500.0);
}

#[test]
fn test_merge_sums_within_stock() {
    let mut cart = Cart::new("user-1");
    add_item(&mut cart, item("P1", "M", 2, 10.0, 100)).unwrap();
    add_item(&mut cart, item("P1", "M", 3, 10.0, 100)).unwrap();

    assert_eq!(cart.items[0].quantity, 5);
    assert_eq!(item_count(&cart), 5);
}

#[test]
fn test_merge_ceiling_is_last_write_wins() {
    // The incoming stock snapshot is the clamp bound even when it is
    // smaller than what earlier merges saw.
    let mut cart = Cart::new("user-1");
    add_item(&mut cart, item("P1", "M", 2, 10.0, 10)).unwrap();
    add_item(&mut cart, item("P1", "M", 4, 10.0, 3)).unwrap();

    assert_eq!(cart.items[0].quantity, 3);
    assert_eq!(cart.items[0].stock, 3);

    // And it grows back if a later merge reports more stock
    add_item(&mut cart, item("P1", "M", 4, 10.0, 20)).unwrap();
    assert_eq!(cart.items[0].quantity, 7);
    assert_eq!(cart.items[0].stock, 20);
}

#[test]
fn test_fresh_add_clamps_to_stock() {
    let mut cart = Cart::new("user-1");
    add_item(&mut cart, item("P1", "M", 10, 10.0, 4)).unwrap();
    assert_eq!(cart.items[0].quantity, 4);
}

#[test]
fn test_add_rejects_non_positive_quantity() {
    let mut cart = Cart::new("user-1");
    let err = add_item(&mut cart, item("P1", "M", 0, 10.0, 5)).unwrap_err();
    assert!(matches!(err, CartError::InvalidQuantity(_)));

    let err = add_item(&mut cart, item("P1", "M", -3, 10.0, 5)).unwrap_err();
    assert!(matches!(err, CartError::InvalidQuantity(_)));
    assert!(cart.items.is_empty());
}

#[test]
fn test_add_rejects_out_of_stock_line() {
    let mut cart = Cart::new("user-1");
    let err = add_item(&mut cart, item("P1", "M", 1, 10.0, 0)).unwrap_err();
    assert!(matches!(err, CartError::InvalidQuantity(_)));
    assert!(cart.items.is_empty());
}

#[test]
fn test_add_rejects_bad_price() {
    let mut cart = Cart::new("user-1");
    let err = add_item(&mut cart, item("P1", "M", 1, f64::NAN, 5)).unwrap_err();
    assert!(matches!(err, CartError::InvalidQuantity(_)));

    let err = add_item(&mut cart, item("P1", "M", 1, -1.0, 5)).unwrap_err();
    assert!(matches!(err, CartError::InvalidQuantity(_)));
}

#[test]
fn test_offer_price_preferred_in_total() {
    let mut cart = Cart::new("user-1");
    let mut line = item("P1", "M", 2, 100.0, 5);
    line.offer_price = Some(80.0);
    add_item(&mut cart, line).unwrap();

    assert_eq!(total(&cart), 160.0);
}

#[test]
fn test_sizes_and_variants_are_distinct_lines() {
    let mut cart = Cart::new("user-1");
    add_item(&mut cart, item("P1", "M", 1, 10.0, 5)).unwrap();
    add_item(&mut cart, item("P1", "L", 1, 10.0, 5)).unwrap();
    add_item(&mut cart, item_with_variant("P1", "M", "red", 1)).unwrap();
    add_item(&mut cart, item_with_variant("P1", "M", "blue", 1)).unwrap();

    assert_eq!(cart.items.len(), 4);

    // Same key merges instead of appending
    add_item(&mut cart, item_with_variant("P1", "M", "red", 2)).unwrap();
    assert_eq!(cart.items.len(), 4);
    assert_eq!(item_count(&cart), 7);
}

#[test]
fn test_update_quantity_sets_directly_without_clamp() {
    let mut cart = Cart::new("user-1");
    add_item(&mut cart, item("P1", "M", 2, 10.0, 5)).unwrap();

    // The update path applies no stock clamp
    update_quantity(&mut cart, "P1", "M", None, 50).unwrap();
    assert_eq!(cart.items[0].quantity, 50);
    assert_eq!(total(&cart), 500.0);
}

#[test]
fn test_update_quantity_zero_removes_line() {
    let mut cart = Cart::new("user-1");
    add_item(&mut cart, item("P1", "M", 2, 10.0, 5)).unwrap();

    update_quantity(&mut cart, "P1", "M", None, 0).unwrap();
    assert!(cart.items.is_empty());
    assert_eq!(cart.total, 0.0);
    assert_eq!(cart.item_count, 0);
}

#[test]
fn test_update_quantity_negative_removes_missing_line_ok() {
    // quantity <= 0 is remove semantics, and remove tolerates absence
    let mut cart = Cart::new("user-1");
    update_quantity(&mut cart, "P1", "M", None, -1).unwrap();
    assert!(cart.items.is_empty());
}

#[test]
fn test_update_quantity_missing_line_errors() {
    let mut cart = Cart::new("user-1");
    add_item(&mut cart, item("P1", "M", 2, 10.0, 5)).unwrap();

    let err = update_quantity(&mut cart, "P1", "XL", None, 3).unwrap_err();
    assert!(matches!(err, CartError::ItemNotFound(_)));

    let err = update_quantity(&mut cart, "P1", "M", Some("red"), 3).unwrap_err();
    assert!(matches!(err, CartError::ItemNotFound(_)));
}

#[test]
fn test_remove_item_is_noop_when_absent() {
    let mut cart = Cart::new("user-1");
    add_item(&mut cart, item("P1", "M", 2, 100.0, 5)).unwrap();
    let before = cart.clone();

    remove_item(&mut cart, "P2", "M", None);
    remove_item(&mut cart, "P1", "L", None);

    assert_eq!(cart.items, before.items);
    assert_eq!(cart.total, before.total);
    assert_eq!(cart.item_count, before.item_count);
}

#[test]
fn test_remove_item_recomputes_totals() {
    let mut cart = Cart::new("user-1");
    add_item(&mut cart, item("P1", "M", 2, 100.0, 5)).unwrap();
    add_item(&mut cart, item("P2", "L", 1, 50.0, 5)).unwrap();

    remove_item(&mut cart, "P1", "M", None);
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.total, 50.0);
    assert_eq!(cart.item_count, 1);
}

#[test]
fn test_clear_zeroes_derived_fields() {
    let mut cart = Cart::new("user-1");
    add_item(&mut cart, item("P1", "M", 2, 100.0, 5)).unwrap();

    clear(&mut cart);
    assert!(cart.is_empty());
    assert_eq!(cart.total, 0.0);
    assert_eq!(cart.item_count, 0);
}

#[test]
fn test_totals_are_permutation_independent() {
    // Two different operation orders producing the same item set give
    // the same totals.
    let mut a = Cart::new("user-1");
    add_item(&mut a, item("P1", "M", 2, 19.99, 10)).unwrap();
    add_item(&mut a, item("P2", "L", 1, 5.25, 10)).unwrap();
    add_item(&mut a, item("P1", "M", 1, 19.99, 10)).unwrap();

    let mut b = Cart::new("user-2");
    add_item(&mut b, item("P2", "L", 1, 5.25, 10)).unwrap();
    add_item(&mut b, item("P1", "M", 4, 19.99, 10)).unwrap();
    update_quantity(&mut b, "P1", "M", None, 3).unwrap();

    assert_eq!(total(&a), total(&b));
    assert_eq!(item_count(&a), item_count(&b));
}

#[test]
fn test_total_precision() {
    // Accumulating 0.1-priced lines must not drift the way naive f64
    // summation does.
    let mut cart = Cart::new("user-1");
    add_item(&mut cart, item("P1", "M", 3, 0.1, 100)).unwrap();
    add_item(&mut cart, item("P2", "M", 3, 0.2, 100)).unwrap();

    assert_eq!(total(&cart), 0.9);
}

#[test]
fn test_merged_quantity_is_sum_clamped_to_latest_stock() {
    // Property 1: for any add sequence on one key, quantity is the sum
    // of added quantities clamped to the most recent stock snapshot.
    let adds = [(2, 10), (3, 10), (4, 8), (1, 8)];
    let mut cart = Cart::new("user-1");
    let mut expected = 0;
    for (qty, stock) in adds {
        add_item(&mut cart, item("P1", "M", qty, 10.0, stock)).unwrap();
        expected = (expected + qty).min(stock);
    }
    assert_eq!(cart.items[0].quantity, expected);
}

//! # Commercial Rounding and Ordering
//!
//! Turns computed amounts into quantities a shopper can actually buy, and
//! keeps shopping lists in aisle order.

use crate::ingredient_model::{ShoppingItem, Unit};
use std::cmp::Ordering;

/// Tolerance for float noise before rounding discrete units up
const EPSILON: f64 = 1e-9;

/// Smallest amount a positive non-count quantity is rounded to
const MIN_DECIMAL_STEP: f64 = 0.1;

/// Round a quantity to a shop-friendly increment
///
/// - Count units (unidad, diente, rama, hoja) round up to the next integer
/// - Below 10: nearest 0.1
/// - From 10 to 100: nearest 5
/// - From 100: nearest 10
///
/// A positive quantity never rounds down to zero.
///
/// # Examples
///
/// ```rust
/// use mealplan_shopping::presentation::round_to_commercial;
/// use mealplan_shopping::ingredient_model::Unit;
///
/// assert_eq!(round_to_commercial(0.2, &Unit::Piece), 1.0);
/// assert_eq!(round_to_commercial(37.0, &Unit::Gram), 35.0);
/// assert_eq!(round_to_commercial(1004.0, &Unit::Gram), 1000.0);
/// ```
pub fn round_to_commercial(quantity: f64, unit: &Unit) -> f64 {
    if !quantity.is_finite() || quantity <= 0.0 {
        return 0.0;
    }

    if unit.is_count() {
        return (quantity - EPSILON).ceil().max(1.0);
    }

    let rounded = if quantity < 10.0 {
        (quantity * 10.0).round() / 10.0
    } else if quantity < 100.0 {
        (quantity / 5.0).round() * 5.0
    } else {
        (quantity / 10.0).round() * 10.0
    };

    rounded.max(MIN_DECIMAL_STEP)
}

/// Format a quantity for display: "2", "1.5", "0.25"
pub fn format_quantity(quantity: f64) -> String {
    if (quantity - quantity.round()).abs() < EPSILON {
        return format!("{}", quantity.round() as i64);
    }

    let formatted = format!("{:.2}", quantity);
    formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Sort items by aisle order, then alphabetically by display text
///
/// Items sharing a name (split by incompatible units) are further ordered by
/// unit token and quantity, so the result does not depend on input order.
pub fn sort_items(items: &mut [ShoppingItem]) {
    items.sort_by(compare_items);
}

fn compare_items(a: &ShoppingItem, b: &ShoppingItem) -> Ordering {
    a.category
        .display_rank()
        .cmp(&b.category.display_rank())
        .then_with(|| a.text.to_lowercase().cmp(&b.text.to_lowercase()))
        .then_with(|| a.text.cmp(&b.text))
        .then_with(|| unit_token(a).cmp(unit_token(b)))
        .then_with(|| {
            let (qa, qb) = (a.quantity.unwrap_or(0.0), b.quantity.unwrap_or(0.0));
            qa.partial_cmp(&qb).unwrap_or(Ordering::Equal)
        })
}

fn unit_token(item: &ShoppingItem) -> &str {
    item.unit.as_ref().map(Unit::token).unwrap_or("")
}

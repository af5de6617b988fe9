//! # Shopping List Operations
//!
//! Pure functions over a shopping list. Every operation takes the current
//! items and returns a new list; the input is never modified. Operations that
//! add or change items keep the list in aisle order.
//!
//! ## Usage
//!
//! ```rust
//! use mealplan_shopping::shopping_list::{add_manual_item, get_progress, toggle_item, NewItem};
//!
//! let items = add_manual_item(&[], NewItem::new("Leche"));
//! let id = items[0].id.clone();
//!
//! let items = toggle_item(&items, &id);
//! assert_eq!(get_progress(&items).to_string(), "1/1 (100%)");
//! ```

use crate::categorization::categorize;
use crate::ingredient_model::{
    sanitize_quantity, Category, Multiplier, Progress, ShoppingItem, Unit,
};
use crate::presentation::{round_to_commercial, sort_items};
use crate::text_processing::normalize_name;
use log::{debug, info};
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;

/// Fields to change on an existing item; `None` leaves a field as it is
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemUpdate {
    pub text: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<Unit>,
    pub category: Option<Category>,
    /// An empty note clears the current one
    pub note: Option<String>,
    pub checked: Option<bool>,
}

/// A manually entered item
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewItem {
    pub text: String,
    pub quantity: Option<f64>,
    pub unit: Option<Unit>,
    /// Classified from the text when absent
    pub category: Option<Category>,
    pub note: Option<String>,
}

impl NewItem {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn with_quantity(mut self, quantity: f64, unit: Unit) -> Self {
        self.quantity = Some(quantity);
        self.unit = Some(unit);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

/// Flip the checked state of one item
pub fn toggle_item(items: &[ShoppingItem], id: &str) -> Vec<ShoppingItem> {
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.id == id {
                item.checked = !item.checked;
            }
            item
        })
        .collect()
}

/// Remove one item; unknown ids leave the list unchanged
pub fn remove_item(items: &[ShoppingItem], id: &str) -> Vec<ShoppingItem> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

/// Apply a partial update to one item
pub fn update_item(items: &[ShoppingItem], id: &str, update: &ItemUpdate) -> Vec<ShoppingItem> {
    let mut updated: Vec<ShoppingItem> = items
        .iter()
        .map(|item| {
            if item.id == id {
                apply_update(item.clone(), update)
            } else {
                item.clone()
            }
        })
        .collect();

    sort_items(&mut updated);
    updated
}

fn apply_update(mut item: ShoppingItem, update: &ItemUpdate) -> ShoppingItem {
    if let Some(text) = &update.text {
        let text = text.trim();
        if !text.is_empty() {
            item.text = text.to_string();
        }
    }
    if let Some(quantity) = update.quantity {
        if let Some(quantity) = sanitize_quantity(quantity) {
            item.quantity = Some(quantity);
        }
    }
    if let Some(unit) = &update.unit {
        item.unit = Some(unit.clone());
    }
    if let Some(category) = update.category {
        item.category = category;
    }
    if let Some(note) = &update.note {
        item = item.with_note(note);
    }
    if let Some(checked) = update.checked {
        item.checked = checked;
    }
    item
}

/// Add a manually entered item
///
/// Blank text is ignored. Without an explicit category the text is
/// normalized and classified the same way consolidated items are.
pub fn add_manual_item(items: &[ShoppingItem], new_item: NewItem) -> Vec<ShoppingItem> {
    let text = new_item.text.trim();
    if text.is_empty() {
        debug!("Ignoring manual item with blank text");
        return items.to_vec();
    }

    let taken: HashSet<String> = items.iter().map(|item| item.id.clone()).collect();
    let id = generate_item_id(&taken);
    let category = new_item
        .category
        .unwrap_or_else(|| categorize(&normalize_name(text)));

    let mut item = ShoppingItem::new(&id, text, category);
    match (new_item.quantity, new_item.unit) {
        (Some(quantity), unit) => item = item.with_quantity(quantity, unit.unwrap_or(Unit::Piece)),
        (None, unit) => item.unit = unit,
    }
    if let Some(note) = &new_item.note {
        item = item.with_note(note);
    }

    let mut updated = items.to_vec();
    updated.push(item);
    sort_items(&mut updated);
    updated
}

/// Drop every checked item
pub fn clear_checked_items(items: &[ShoppingItem]) -> Vec<ShoppingItem> {
    let remaining: Vec<ShoppingItem> =
        items.iter().filter(|item| !item.checked).cloned().collect();
    info!("Cleared {} checked items", items.len() - remaining.len());
    remaining
}

/// Scale every quantity by `multiplier` and round it again
///
/// The multiplier replaces rather than compounds: pass the list's base
/// quantities, not a list that was already scaled.
pub fn apply_global_multiplier(
    items: &[ShoppingItem],
    multiplier: Multiplier,
) -> Vec<ShoppingItem> {
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if let Some(quantity) = item.quantity {
                let unit = item.unit.clone().unwrap_or(Unit::Piece);
                item.quantity = Some(round_to_commercial(quantity * multiplier.value(), &unit));
            }
            item
        })
        .collect()
}

/// Checked/total counts for the list
pub fn get_progress(items: &[ShoppingItem]) -> Progress {
    let checked = items.iter().filter(|item| item.checked).count();
    Progress::new(checked, items.len())
}

/// Items grouped by category in display order; empty categories are left out
pub fn group_by_category(items: &[ShoppingItem]) -> Vec<(Category, Vec<ShoppingItem>)> {
    let mut sorted = items.to_vec();
    sort_items(&mut sorted);

    Category::DISPLAY_ORDER
        .iter()
        .filter_map(|category| {
            let group: Vec<ShoppingItem> = sorted
                .iter()
                .filter(|item| item.category == *category)
                .cloned()
                .collect();
            (!group.is_empty()).then_some((*category, group))
        })
        .collect()
}

/// Random opaque id not present in `taken`
pub(crate) fn generate_item_id(taken: &HashSet<String>) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let id = format!("item-{:016x}", rng.gen::<u64>());
        if !taken.contains(&id) {
            return id;
        }
    }
}

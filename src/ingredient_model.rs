//! # Shopping List Data Model
//!
//! This module defines the data structures shared by the parser, the
//! consolidation engine and the shopping list operations.
//!
//! ## Core Concepts
//!
//! - **ParsedIngredient**: one free-text ingredient line split into quantity, unit and name
//! - **Unit**: closed set of measurement units, with a `Named` escape hatch for unknown tokens
//! - **Category**: the fixed grocery-aisle buckets a shopping item belongs to
//! - **ShoppingItem**: one line of the shopping list as stored and exported
//! - **Multiplier**: the validated global serving multiplier
//!
//! ## Usage
//!
//! ```rust
//! use mealplan_shopping::ingredient_model::{Category, ShoppingItem, Unit};
//!
//! let flour = ShoppingItem::new("item-1", "harina", Category::Pantry)
//!     .with_quantity(500.0, Unit::Gram)
//!     .with_note("integral");
//!
//! assert_eq!(flour.to_string(), "harina (500 g) - integral");
//! ```

use crate::errors::ShoppingError;
use crate::presentation::format_quantity;
use crate::unit_conversion::normalize_unit;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Largest accepted global multiplier
pub const MAX_MULTIPLIER: f64 = 10.0;

/// Result of parsing one ingredient line
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIngredient {
    /// Parsed amount, 1 when the line carries no leading number
    pub quantity: f64,
    /// Canonical unit, `Unit::Piece` when no unit was recognized
    pub unit: Unit,
    /// The remaining text (e.g., "chopped onions", "sal al gusto")
    pub name: String,
}

/// Measurement units with one canonical token each
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    // Weight units
    /// Grams
    Gram,
    /// Kilograms
    Kilogram,
    /// Ounces
    Ounce,
    /// Pounds
    Pound,

    // Volume units
    /// Milliliters
    Milliliter,
    /// Liters
    Liter,
    /// Tablespoons
    Tablespoon,
    /// Teaspoons
    Teaspoon,
    /// Cups
    Cup,

    // Count units
    /// Generic piece ("unidad"), also the parser fallback
    Piece,
    /// Garlic cloves ("diente")
    Clove,
    /// Sprigs ("rama")
    Sprig,
    /// Leaves ("hoja")
    Leaf,

    // Specialized units
    /// Pinch ("pizca")
    Pinch,
    /// As much as needed ("c/n", "c/s")
    AsNeeded,

    /// Any other unit token, lower-cased
    Named(String),
}

/// Grocery-aisle categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Dairy,
    FruitsVegetables,
    MeatFish,
    Pantry,
    Spices,
    Frozen,
    Bakery,
    Other,
}

/// One entry of a shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Opaque identifier, unique within its list
    pub id: String,
    /// Display name
    pub text: String,
    pub checked: bool,
    /// Stored negative amounts are dropped on load
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_quantity"
    )]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Whether the item came out of a consolidation run rather than manual entry
    pub from_recipe: bool,
}

/// Global serving multiplier, always within `(0, 10]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(into = "f64")]
pub struct Multiplier(f64);

/// Checked/total summary of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub checked: usize,
    pub total: usize,
    /// Rounded percentage, 0 for an empty list
    pub percent: u32,
}

impl Unit {
    /// Canonical token used for display, serialization and merge keys
    pub fn token(&self) -> &str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
            Unit::Milliliter => "ml",
            Unit::Liter => "L",
            Unit::Tablespoon => "tbsp",
            Unit::Teaspoon => "tsp",
            Unit::Cup => "cup",
            Unit::Piece => "unidad",
            Unit::Clove => "diente",
            Unit::Sprig => "rama",
            Unit::Leaf => "hoja",
            Unit::Pinch => "pizca",
            Unit::AsNeeded => "c/n",
            Unit::Named(name) => name,
        }
    }

    /// Check if this is a weight unit that can be merged with other weights
    pub fn is_weight(&self) -> bool {
        matches!(self, Unit::Gram | Unit::Kilogram)
    }

    /// Check if this is a volume unit that can be merged with other volumes
    pub fn is_volume(&self) -> bool {
        matches!(self, Unit::Milliliter | Unit::Liter)
    }

    /// Discrete units that are bought whole and therefore round up
    pub fn is_count(&self) -> bool {
        matches!(self, Unit::Piece | Unit::Clove | Unit::Sprig | Unit::Leaf)
    }
}

impl From<String> for Unit {
    fn from(raw: String) -> Self {
        normalize_unit(&raw)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.token().to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl Category {
    /// Order in which categories are presented
    pub const DISPLAY_ORDER: [Category; 8] = [
        Category::FruitsVegetables,
        Category::MeatFish,
        Category::Dairy,
        Category::Frozen,
        Category::Pantry,
        Category::Bakery,
        Category::Spices,
        Category::Other,
    ];

    /// Position of this category in [`Category::DISPLAY_ORDER`]
    pub fn display_rank(self) -> usize {
        match self {
            Category::FruitsVegetables => 0,
            Category::MeatFish => 1,
            Category::Dairy => 2,
            Category::Frozen => 3,
            Category::Pantry => 4,
            Category::Bakery => 5,
            Category::Spices => 6,
            Category::Other => 7,
        }
    }

    /// Stable snake_case tag, matching the serialized form
    pub fn tag(self) -> &'static str {
        match self {
            Category::Dairy => "dairy",
            Category::FruitsVegetables => "fruits_vegetables",
            Category::MeatFish => "meat_fish",
            Category::Pantry => "pantry",
            Category::Spices => "spices",
            Category::Frozen => "frozen",
            Category::Bakery => "bakery",
            Category::Other => "other",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Category::FruitsVegetables => "🥬",
            Category::MeatFish => "🥩",
            Category::Dairy => "🧀",
            Category::Frozen => "🧊",
            Category::Pantry => "🥫",
            Category::Bakery => "🥖",
            Category::Spices => "🧂",
            Category::Other => "📦",
        }
    }
}

impl ShoppingItem {
    /// Create an unchecked, manually added item with no quantity
    pub fn new(id: &str, text: &str, category: Category) -> Self {
        Self {
            id: id.to_string(),
            text: text.trim().to_string(),
            checked: false,
            quantity: None,
            unit: None,
            category,
            note: None,
            from_recipe: false,
        }
    }

    /// Attach a quantity; negative or non-finite amounts are dropped
    pub fn with_quantity(mut self, quantity: f64, unit: Unit) -> Self {
        self.quantity = sanitize_quantity(quantity);
        self.unit = Some(unit);
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        let note = note.trim();
        self.note = if note.is_empty() {
            None
        } else {
            Some(note.to_string())
        };
        self
    }

    /// Mark the item as produced by consolidation
    pub fn from_recipe(mut self) -> Self {
        self.from_recipe = true;
        self
    }

    /// Render "quantity unit"; the generic piece unit is left implicit
    pub fn quantity_label(&self) -> Option<String> {
        let quantity = self.quantity?;
        let amount = format_quantity(quantity);
        match &self.unit {
            Some(Unit::Piece) | None => Some(amount),
            Some(unit) => Some(format!("{} {}", amount, unit)),
        }
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)?;

        if let Some(label) = self.quantity_label() {
            write!(f, " ({})", label)?;
        }

        if let Some(note) = &self.note {
            write!(f, " - {}", note)?;
        }

        Ok(())
    }
}

impl Multiplier {
    /// Validate a multiplier; legal values are `(0, 10]`
    pub fn new(value: f64) -> Result<Self, ShoppingError> {
        if value.is_finite() && value > 0.0 && value <= MAX_MULTIPLIER {
            Ok(Self(value))
        } else {
            Err(ShoppingError::InvalidMultiplier(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self(1.0)
    }
}

impl From<Multiplier> for f64 {
    fn from(multiplier: Multiplier) -> Self {
        multiplier.0
    }
}

impl<'de> Deserialize<'de> for Multiplier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Multiplier::new(value).map_err(serde::de::Error::custom)
    }
}

impl Progress {
    pub fn new(checked: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            ((checked as f64 / total as f64) * 100.0).round() as u32
        };
        Self {
            checked,
            total,
            percent,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({}%)", self.checked, self.total, self.percent)
    }
}

pub(crate) fn sanitize_quantity(quantity: f64) -> Option<f64> {
    if quantity.is_finite() && quantity >= 0.0 {
        Some(quantity)
    } else {
        None
    }
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.and_then(sanitize_quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_tokens() {
        assert_eq!(Unit::Gram.token(), "g");
        assert_eq!(Unit::Liter.token(), "L");
        assert_eq!(Unit::Piece.token(), "unidad");
        assert_eq!(Unit::Named("lata".to_string()).token(), "lata");
    }

    #[test]
    fn test_unit_families() {
        assert!(Unit::Gram.is_weight());
        assert!(Unit::Kilogram.is_weight());
        assert!(!Unit::Ounce.is_weight());

        assert!(Unit::Milliliter.is_volume());
        assert!(!Unit::Cup.is_volume());

        assert!(Unit::Piece.is_count());
        assert!(Unit::Clove.is_count());
        assert!(!Unit::Pinch.is_count());
    }

    #[test]
    fn test_unit_serde_uses_tokens() {
        let json = serde_json::to_string(&Unit::Kilogram).unwrap();
        assert_eq!(json, "\"kg\"");

        let unit: Unit = serde_json::from_str("\"gramos\"").unwrap();
        assert_eq!(unit, Unit::Gram);
    }

    #[test]
    fn test_category_display_order_matches_rank() {
        for (rank, category) in Category::DISPLAY_ORDER.iter().enumerate() {
            assert_eq!(category.display_rank(), rank);
        }
    }

    #[test]
    fn test_category_serde_tags() {
        let json = serde_json::to_string(&Category::FruitsVegetables).unwrap();
        assert_eq!(json, "\"fruits_vegetables\"");
        assert_eq!(Category::MeatFish.tag(), "meat_fish");
    }

    #[test]
    fn test_item_builder_and_display() {
        let item = ShoppingItem::new("a", "  cebolla ", Category::FruitsVegetables)
            .with_quantity(2.0, Unit::Piece)
            .from_recipe();

        assert_eq!(item.text, "cebolla");
        assert!(item.from_recipe);
        assert_eq!(item.to_string(), "cebolla (2)");

        let oil = ShoppingItem::new("b", "olive oil", Category::Pantry)
            .with_quantity(4.0, Unit::Tablespoon);
        assert_eq!(oil.to_string(), "olive oil (4 tbsp)");
    }

    #[test]
    fn test_negative_quantity_is_dropped() {
        let item = ShoppingItem::new("a", "sal", Category::Spices).with_quantity(-1.0, Unit::Pinch);
        assert_eq!(item.quantity, None);
        assert_eq!(item.to_string(), "sal");
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = ShoppingItem::new("x1", "pan", Category::Bakery).from_recipe();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["fromRecipe"], true);
        assert_eq!(json["category"], "bakery");
        assert!(json.get("quantity").is_none());
    }

    #[test]
    fn test_deserialize_drops_negative_quantity() {
        let json = r#"{"id":"a","text":"sal","checked":false,"quantity":-3,
                       "unit":"g","category":"spices","fromRecipe":false}"#;
        let item: ShoppingItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, None);

        let json = r#"{"id":"b","text":"pan","checked":true,"quantity":2,
                       "category":"bakery","fromRecipe":true}"#;
        let item: ShoppingItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, Some(2.0));

        let json = r#"{"id":"c","text":"pan","checked":true,
                       "category":"bakery","fromRecipe":true}"#;
        let item: ShoppingItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, None);
    }

    #[test]
    fn test_multiplier_range() {
        assert!(Multiplier::new(1.0).is_ok());
        assert!(Multiplier::new(10.0).is_ok());
        assert!(Multiplier::new(0.5).is_ok());
        assert!(Multiplier::new(0.0).is_err());
        assert!(Multiplier::new(-2.0).is_err());
        assert!(Multiplier::new(10.5).is_err());
        assert!(Multiplier::new(f64::NAN).is_err());
    }

    #[test]
    fn test_multiplier_deserialize_validates() {
        assert!(serde_json::from_str::<Multiplier>("2.0").is_ok());
        assert!(serde_json::from_str::<Multiplier>("0").is_err());
    }

    #[test]
    fn test_progress() {
        assert_eq!(Progress::new(1, 3).percent, 33);
        assert_eq!(Progress::new(2, 3).percent, 67);
        assert_eq!(Progress::new(0, 0).percent, 0);
        assert_eq!(Progress::new(1, 4).to_string(), "1/4 (25%)");
    }
}

//! # Unit Normalization and Conversion
//!
//! Maps unit spellings, abbreviations and plurals (English and Spanish) onto
//! one canonical [`Unit`] per family, and converts quantities between units
//! of the same physical dimension.
//!
//! ```rust
//! use mealplan_shopping::unit_conversion::{convert, normalize_unit};
//! use mealplan_shopping::ingredient_model::Unit;
//!
//! assert_eq!(normalize_unit("Gramos"), Unit::Gram);
//! assert_eq!(convert(0.5, &Unit::Kilogram, &Unit::Gram), 500.0);
//! ```

use crate::ingredient_model::Unit;
use log::trace;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Grams per kilogram and milliliters per liter
const METRIC_RATIO: f64 = 1000.0;

/// Teaspoons per tablespoon
const SPOON_RATIO: f64 = 3.0;

/// Unit spellings and their canonical unit
static UNIT_MAPPINGS: LazyLock<HashMap<&'static str, Unit>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Weight units
    for token in ["g", "gr", "grs", "gramo", "gramos", "gram", "grams"] {
        map.insert(token, Unit::Gram);
    }
    for token in ["kg", "kilo", "kilos", "kilogramo", "kilogramos", "kilogram", "kilograms"] {
        map.insert(token, Unit::Kilogram);
    }
    for token in ["oz", "ounce", "ounces", "onza", "onzas"] {
        map.insert(token, Unit::Ounce);
    }
    for token in ["lb", "lbs", "pound", "pounds", "libra", "libras"] {
        map.insert(token, Unit::Pound);
    }

    // Volume units
    for token in ["ml", "mililitro", "mililitros", "milliliter", "milliliters"] {
        map.insert(token, Unit::Milliliter);
    }
    for token in ["l", "litro", "litros", "liter", "liters", "litre", "litres"] {
        map.insert(token, Unit::Liter);
    }
    for token in ["tbsp", "tablespoon", "tablespoons", "cucharada", "cucharadas"] {
        map.insert(token, Unit::Tablespoon);
    }
    for token in ["tsp", "teaspoon", "teaspoons", "cucharadita", "cucharaditas"] {
        map.insert(token, Unit::Teaspoon);
    }
    for token in ["cup", "cups", "taza", "tazas"] {
        map.insert(token, Unit::Cup);
    }

    // Count units
    for token in ["unidad", "unidades", "pieza", "piezas", "unit", "units", "piece", "pieces"] {
        map.insert(token, Unit::Piece);
    }
    for token in ["diente", "dientes", "clove", "cloves"] {
        map.insert(token, Unit::Clove);
    }
    for token in ["rama", "ramas", "sprig", "sprigs"] {
        map.insert(token, Unit::Sprig);
    }
    for token in ["hoja", "hojas", "leaf", "leaves"] {
        map.insert(token, Unit::Leaf);
    }

    // Specialized units
    for token in ["pizca", "pizcas", "pinch", "pinches"] {
        map.insert(token, Unit::Pinch);
    }
    for token in ["c/s", "c/n"] {
        map.insert(token, Unit::AsNeeded);
    }

    map
});

/// Map a raw unit token onto its canonical unit
///
/// Lookup is case-insensitive and ignores a trailing period ("tbsp.").
/// Unknown tokens come back as [`Unit::Named`] holding the lower-cased token.
pub fn normalize_unit(raw: &str) -> Unit {
    let token = raw.trim().trim_end_matches('.').to_lowercase();

    match UNIT_MAPPINGS.get(token.as_str()) {
        Some(unit) => unit.clone(),
        None => {
            trace!("Unknown unit token '{}', keeping it as a named unit", token);
            Unit::Named(token)
        }
    }
}

/// Convert `quantity` from one unit into another
///
/// Only mass (g/kg), metric volume (ml/L) and spoon (tbsp/tsp) pairs are
/// known. Any other pair returns `quantity` unchanged, so callers must check
/// [`are_compatible`] before adding converted amounts.
pub fn convert(quantity: f64, from: &Unit, to: &Unit) -> f64 {
    if from == to {
        return quantity;
    }

    match (from, to) {
        (Unit::Kilogram, Unit::Gram) | (Unit::Liter, Unit::Milliliter) => quantity * METRIC_RATIO,
        (Unit::Gram, Unit::Kilogram) | (Unit::Milliliter, Unit::Liter) => quantity / METRIC_RATIO,
        (Unit::Tablespoon, Unit::Teaspoon) => quantity * SPOON_RATIO,
        (Unit::Teaspoon, Unit::Tablespoon) => quantity / SPOON_RATIO,
        _ => {
            trace!("No conversion from {} to {}, keeping {}", from, to, quantity);
            quantity
        }
    }
}

/// Two units can be summed when both are weights or both are metric volumes
pub fn are_compatible(a: &Unit, b: &Unit) -> bool {
    (a.is_weight() && b.is_weight()) || (a.is_volume() && b.is_volume())
}

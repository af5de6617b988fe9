//! # Ingredient Parser
//!
//! Turns one free-text ingredient line into a [`ParsedIngredient`].
//!
//! ## Features
//!
//! - Leading quantities as integers, decimals ("1.5" or "1,5"), fractions ("1/2")
//!   and mixed numbers ("1 1/2")
//! - Known units in English and Spanish, glued ("500g") or spaced ("500 g")
//! - Graceful fallback: a line that cannot be split is kept whole with quantity 1
//!
//! Parsing never fails. The attempts run in order (quantity with a known unit,
//! then quantity alone) and the final fallback always succeeds.
//!
//! ## Usage
//!
//! ```rust
//! use mealplan_shopping::ingredient_parser::parse_ingredient_line;
//! use mealplan_shopping::ingredient_model::Unit;
//!
//! let parsed = parse_ingredient_line("2 cups chopped onions");
//! assert_eq!(parsed.quantity, 2.0);
//! assert_eq!(parsed.unit, Unit::Cup);
//! assert_eq!(parsed.name, "chopped onions");
//!
//! let parsed = parse_ingredient_line("sal al gusto");
//! assert_eq!(parsed.quantity, 1.0);
//! assert_eq!(parsed.unit, Unit::Piece);
//! assert_eq!(parsed.name, "sal al gusto");
//! ```

use crate::ingredient_model::{ParsedIngredient, Unit};
use crate::measurement_patterns::{QUANTITY_ONLY_REGEX, QUANTITY_UNIT_REGEX};
use crate::unit_conversion::normalize_unit;
use log::{debug, trace};

/// One parse attempt; `None` hands the line to the next attempt
type ParseAttempt = fn(&str) -> Option<ParsedIngredient>;

const PARSE_ATTEMPTS: [ParseAttempt; 2] = [parse_with_unit, parse_quantity_only];

/// Parse a single ingredient line
pub fn parse_ingredient_line(line: &str) -> ParsedIngredient {
    let line = line.trim();

    for attempt in PARSE_ATTEMPTS {
        if let Some(parsed) = attempt(line) {
            trace!("Parsed '{}' -> {:?}", line, parsed);
            return parsed;
        }
    }

    debug!("No quantity found in '{}', defaulting to 1 {}", line, Unit::Piece);
    ParsedIngredient {
        quantity: 1.0,
        unit: Unit::Piece,
        name: line.to_string(),
    }
}

/// Parse every non-blank line of a block of text
pub fn parse_ingredient_list(text: &str) -> Vec<ParsedIngredient> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_ingredient_line)
        .collect()
}

fn parse_with_unit(line: &str) -> Option<ParsedIngredient> {
    let captures = QUANTITY_UNIT_REGEX.captures(line)?;
    let quantity = parse_quantity(&captures["qty"])?;
    let unit = normalize_unit(&captures["unit"]);
    let name = captures["name"].trim().to_string();

    Some(ParsedIngredient { quantity, unit, name })
}

fn parse_quantity_only(line: &str) -> Option<ParsedIngredient> {
    let captures = QUANTITY_ONLY_REGEX.captures(line)?;
    let quantity = parse_quantity(&captures["qty"])?;
    let name = captures["name"].trim().to_string();

    Some(ParsedIngredient {
        quantity,
        unit: Unit::Piece,
        name,
    })
}

/// Parse a quantity string: "2", "1.5", "1,5", "1/2" or "1 1/2"
fn parse_quantity(qty_str: &str) -> Option<f64> {
    let qty_str = qty_str.trim();

    if let Some((whole_part, fraction_part)) = qty_str.split_once(char::is_whitespace) {
        let whole: f64 = whole_part.parse().ok()?;
        return Some(whole + parse_fraction(fraction_part.trim())?);
    }

    if qty_str.contains('/') {
        return parse_fraction(qty_str);
    }

    qty_str.replace(',', ".").parse().ok()
}

fn parse_fraction(fraction: &str) -> Option<f64> {
    let (numerator, denominator) = fraction.split_once('/')?;
    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;

    if denominator == 0.0 {
        debug!("Zero denominator in '{}'", fraction);
        return None;
    }

    Some(numerator / denominator)
}

//! # Measurement Patterns Module
//!
//! This module contains the regex patterns used to split an ingredient line
//! into quantity, unit and name.

use lazy_static::lazy_static;
use regex::Regex;

// Integer, decimal with '.' or ',', simple fraction or mixed number ("1 1/2")
const NUMBER: &str = r"(?P<qty>\d+\s+\d+/\d+|\d+/\d+|\d+(?:[.,]\d+)?)";

// Unit alphabet, longest alternatives first so "kg" is never read as "k" + "g"
const UNIT_TOKENS: &str = concat!(
    r"(?P<unit>",
    r"kilogramos|kilogramo|kilos|kilo|kg|gramos|gramo|grs|gr|g|mililitros|",
    r"mililitro|ml|litros|litro|l|tablespoons|tablespoon|tbsp|cucharadas|",
    r"cucharada|teaspoons|teaspoon|tsp|cucharaditas|cucharadita|cups|cup|",
    r"tazas|taza|oz|lbs|lb|unidades|unidad|piezas|pieza|dientes|diente|ramas|",
    r"rama|hojas|hoja|pizcas|pizca|c/s|c/n",
    ")"
);

lazy_static! {
    /// Number, known unit, then the ingredient name
    pub static ref QUANTITY_UNIT_REGEX: Regex = Regex::new(&format!(
        r"(?i)^{NUMBER}\s*{UNIT_TOKENS}\s+(?P<name>.+)$"
    ))
    .expect("Quantity/unit pattern should be valid");

    /// Number followed by the ingredient name
    pub static ref QUANTITY_ONLY_REGEX: Regex =
        Regex::new(&format!(r"(?i)^{NUMBER}\s+(?P<name>.+)$"))
            .expect("Quantity-only pattern should be valid");

    /// Parenthesized aside, e.g. "(opcional)"
    pub static ref PARENTHETICAL_REGEX: Regex =
        Regex::new(r"\([^)]*\)").expect("Parenthetical pattern should be valid");
}

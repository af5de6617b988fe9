//! # Text Processing Module
//!
//! Builds the matching key for an ingredient name. Two occurrences of an
//! ingredient are the same shopping item when their keys are equal.
//!
//! ## Steps
//!
//! 1. Lower-case
//! 2. Drop parenthesized asides ("tomates (maduros)")
//! 3. Cut at the first comma ("onion, diced")
//! 4. Fold diacritics (á → a, ñ → n, ...)
//! 5. Drop anything that is not a letter, digit or whitespace (any script)
//! 6. Remove descriptive stop-words (picado, de, fresco, ...)
//! 7. Collapse whitespace
//!
//! Punctuation goes before stop-words so that a second pass can never expose
//! a new stop-word, which keeps the function idempotent.
//!
//! Ingredient nouns are not translated: "onion" and "cebolla" produce
//! different keys.

use crate::measurement_patterns::PARENTHETICAL_REGEX;
use log::trace;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Descriptive words that do not change which product to buy
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "picado", "picada", "picados", "picadas", "cortado", "cortada", "cortados", "cortadas",
        "en", "de", "del", "la", "el", "fresco", "fresca", "frescos", "frescas",
    ]
    .into_iter()
    .collect()
});

/// Normalize an ingredient name into its merge key
///
/// # Examples
///
/// ```rust
/// use mealplan_shopping::text_processing::normalize_name;
///
/// assert_eq!(normalize_name("Cebolla picada (grande), en cubos"), "cebolla");
/// assert_eq!(normalize_name("Jamón del país"), "jamon pais");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let without_asides = PARENTHETICAL_REGEX.replace_all(&lowered, " ");
    let head = without_asides
        .split(',')
        .next()
        .unwrap_or_default();

    let cleaned: String = head
        .chars()
        .map(fold_diacritic)
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    let key = cleaned
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ");

    trace!("Normalized ingredient name '{}' -> '{}'", raw, key);
    key
}

/// Replace an accented Latin letter with its base letter
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

//! # Category Classifier
//!
//! Maps a normalized ingredient name onto a grocery-aisle [`Category`] by
//! substring matching against bilingual (English/Spanish) keyword lists.
//!
//! Categories are checked in a fixed order and the first hit wins. The order
//! resolves the overlaps the keyword lists have: "panceta" is meat before it
//! is bread, "eggplant" is produce before it is an egg, "salmon" is fish
//! before it is salt.
//!
//! A few short keywords only match as whole words: "sal" is salt, but
//! "salsa" and "ensalada" are not.

use crate::ingredient_model::Category;
use log::trace;

/// Keywords are diacritic-free because they run against normalized names
const FROZEN_KEYWORDS: &[&str] = &["congelad", "frozen", "helado", "ice cream", "hielo"];

const MEAT_FISH_KEYWORDS: &[&str] = &[
    "pollo", "chicken", "carne", "beef", "ternera", "cerdo", "pork", "jamon", "bacon",
    "tocino", "panceta", "salchicha", "sausage", "chorizo", "pavo", "turkey", "cordero", "lamb",
    "pescado", "fish", "salmon", "atun", "merluza", "bacalao", "gamba", "camaron",
    "langostino", "shrimp", "prawn", "mejillon", "calamar",
];

const FRUITS_VEGETABLES_KEYWORDS: &[&str] = &[
    "tomate", "tomato", "cebolla", "onion", "ajo", "garlic", "patata", "papa", "potato",
    "zanahoria", "carrot", "lechuga", "lettuce", "pimiento", "bell pepper", "pepino", "cucumber",
    "calabacin", "zucchini", "berenjena", "eggplant", "espinaca", "spinach", "brocoli",
    "broccoli", "champinon", "mushroom", "apio", "celery", "cilantro", "perejil", "parsley",
    "limon", "lemon", "lima", "lime", "manzana", "apple", "platano", "banana", "naranja",
    "orange", "fresa", "strawberry", "aguacate", "avocado", "pera", "pear", "uva", "grape",
    "fruta", "fruit", "verdura", "vegetable", "ensalada", "salad",
];

const DAIRY_KEYWORDS: &[&str] = &[
    "leche", "milk", "queso", "cheese", "yogur", "mantequilla", "butter", "nata", "cream",
    "crema", "huevo", "egg",
];

const BAKERY_KEYWORDS: &[&str] = &[
    "pan", "bread", "baguette", "tortilla", "bollo", "croissant", "bizcocho", "bun",
];

const SPICES_KEYWORDS: &[&str] = &[
    "sal", "salt", "pimienta", "pepper", "comino", "cumin", "oregano", "canela", "cinnamon",
    "paprika", "pimenton", "curry", "nuez moscada", "nutmeg", "laurel", "bay leaf", "tomillo",
    "thyme", "romero", "rosemary", "clavo", "especia", "spice", "vainilla", "vanilla", "azafran",
    "saffron",
];

const PANTRY_KEYWORDS: &[&str] = &[
    "arroz", "rice", "pasta", "espagueti", "spaghetti", "harina", "flour", "azucar", "sugar",
    "aceite", "oil", "vinagre", "vinegar", "frijol", "bean", "lenteja", "lentil", "garbanzo",
    "chickpea", "avena", "oat", "caldo", "broth", "stock", "miel", "honey", "salsa", "sauce",
    "almendra", "almond", "nuez", "nut", "cafe", "coffee", "chocolate", "cacao",
];

/// Keywords that must match a whole word of the name
const WHOLE_WORD_KEYWORDS: &[&str] = &["sal"];

/// Check order; the first category with a matching keyword wins
const CATEGORY_KEYWORDS: [(Category, &[&str]); 7] = [
    (Category::Frozen, FROZEN_KEYWORDS),
    (Category::MeatFish, MEAT_FISH_KEYWORDS),
    (Category::FruitsVegetables, FRUITS_VEGETABLES_KEYWORDS),
    (Category::Dairy, DAIRY_KEYWORDS),
    (Category::Bakery, BAKERY_KEYWORDS),
    (Category::Spices, SPICES_KEYWORDS),
    (Category::Pantry, PANTRY_KEYWORDS),
];

/// Classify a normalized ingredient name
///
/// # Examples
///
/// ```rust
/// use mealplan_shopping::categorization::categorize;
/// use mealplan_shopping::ingredient_model::Category;
///
/// assert_eq!(categorize("cebolla"), Category::FruitsVegetables);
/// assert_eq!(categorize("aceite oliva"), Category::Pantry);
/// assert_eq!(categorize("papel aluminio"), Category::Other);
/// ```
pub fn categorize(normalized_name: &str) -> Category {
    for (category, keywords) in CATEGORY_KEYWORDS {
        if let Some(keyword) = keywords.iter().find(|k| matches_keyword(normalized_name, k)) {
            trace!("'{}' matched '{}' -> {:?}", normalized_name, keyword, category);
            return category;
        }
    }

    Category::Other
}

fn matches_keyword(name: &str, keyword: &str) -> bool {
    if WHOLE_WORD_KEYWORDS.contains(&keyword) {
        name.split_whitespace().any(|word| word == keyword)
    } else {
        name.contains(keyword)
    }
}

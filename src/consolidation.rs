//! # Consolidation Engine
//!
//! Merges the ingredient lines of every recipe in a weekly meal plan into one
//! deduplicated shopping list.
//!
//! For each line the engine parses quantity/unit/name, builds the merge key
//! from the normalized name and then:
//!
//! - inserts a new entry when the key is unseen
//! - adds to the existing entry when the units are identical or compatible,
//!   converting into the unit that was inserted first; the entry shows the
//!   lexicographically smallest spelling among the merged lines
//! - keeps incompatible units apart under a `"{name}_{unit}"` key, so
//!   "2 cups rice" and "200 g rice" become two list items
//!
//! The accumulator lives for one call only; the engine keeps no state.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Weekday;
//! use mealplan_shopping::consolidation::{consolidate, RecipeCatalog, WeeklyPlan};
//! use mealplan_shopping::ingredient_model::Multiplier;
//!
//! let plan = WeeklyPlan::new().with_day(Weekday::Mon, &["Tomato Soup"]);
//! let catalog = RecipeCatalog::new().with_recipe("Tomato Soup", &["500 g tomatoes", "1 onion"]);
//!
//! let items = consolidate(&plan, &catalog, Multiplier::new(2.0)?);
//! assert_eq!(items.len(), 2);
//! # Ok::<(), mealplan_shopping::errors::ShoppingError>(())
//! ```

use crate::categorization::categorize;
use crate::ingredient_model::{Category, Multiplier, ShoppingItem, Unit};
use crate::ingredient_parser::parse_ingredient_line;
use crate::presentation::{round_to_commercial, sort_items};
use crate::shopping_list::generate_item_id;
use crate::text_processing::normalize_name;
use crate::unit_conversion::{are_compatible, convert};
use chrono::Weekday;
use log::{debug, info, warn};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{HashMap, HashSet};

/// Days in the order the plan is walked
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Recipe titles planned for each day of the week
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "HashMap<String, Vec<String>>")]
pub struct WeeklyPlan {
    days: HashMap<Weekday, Vec<String>>,
}

/// Recipe title to ordered ingredient lines
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(into = "HashMap<String, Vec<String>>")]
pub struct RecipeCatalog {
    recipes: HashMap<String, Vec<String>>,
}

/// A recipe as stored by the recipe feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Accepted JSON shapes for a catalog
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogInput {
    Map(HashMap<String, Vec<String>>),
    List(Vec<RecipeRecord>),
}

/// One merged ingredient while a consolidation run is in progress
#[derive(Debug, Clone)]
struct Entry {
    quantity: f64,
    unit: Unit,
    category: Category,
    text: String,
}

/// Merge-key map plus first-seen key order
#[derive(Debug, Default)]
struct Accumulator {
    entries: HashMap<String, Entry>,
    order: Vec<String>,
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recipes for one day
    pub fn with_day(mut self, day: Weekday, titles: &[&str]) -> Self {
        self.set_day(day, titles.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn set_day(&mut self, day: Weekday, titles: Vec<String>) {
        self.days.insert(day, titles);
    }

    /// Recipe titles for a day, empty when nothing is planned
    pub fn recipes_for(&self, day: Weekday) -> &[String] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days with their titles, Monday first
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> + '_ {
        WEEK.iter().map(move |day| (*day, self.recipes_for(*day)))
    }

    /// Total number of planned recipe slots
    pub fn slot_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

impl From<HashMap<String, Vec<String>>> for WeeklyPlan {
    fn from(raw: HashMap<String, Vec<String>>) -> Self {
        let mut plan = WeeklyPlan::new();
        for (key, titles) in raw {
            match parse_day(&key) {
                Some(day) => plan.days.entry(day).or_default().extend(titles),
                None => warn!("Ignoring unknown day key '{}' in meal plan", key),
            }
        }
        plan
    }
}

impl Serialize for WeeklyPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let planned: Vec<_> = self.iter().filter(|(_, titles)| !titles.is_empty()).collect();
        let mut map = serializer.serialize_map(Some(planned.len()))?;
        for (day, titles) in planned {
            map.serialize_entry(day_key(day), titles)?;
        }
        map.end()
    }
}

/// Parse an English ("monday", "Mon") or Spanish ("lunes", "miércoles") day name
pub fn parse_day(key: &str) -> Option<Weekday> {
    match normalize_name(key).as_str() {
        "lunes" => Some(Weekday::Mon),
        "martes" => Some(Weekday::Tue),
        "miercoles" => Some(Weekday::Wed),
        "jueves" => Some(Weekday::Thu),
        "viernes" => Some(Weekday::Fri),
        "sabado" => Some(Weekday::Sat),
        "domingo" => Some(Weekday::Sun),
        other => other.parse().ok(),
    }
}

/// Lower-case English key used when a plan is written back out
pub fn day_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipe(mut self, title: &str, ingredients: &[&str]) -> Self {
        self.insert(title, ingredients.iter().map(|i| i.to_string()).collect());
        self
    }

    pub fn insert(&mut self, title: &str, ingredients: Vec<String>) {
        self.recipes.insert(title.to_string(), ingredients);
    }

    /// Ingredient lines of a recipe, if the title is known
    pub fn ingredients(&self, title: &str) -> Option<&[String]> {
        self.recipes.get(title).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl FromIterator<RecipeRecord> for RecipeCatalog {
    fn from_iter<I: IntoIterator<Item = RecipeRecord>>(records: I) -> Self {
        let recipes = records
            .into_iter()
            .map(|record| (record.title, record.ingredients))
            .collect();
        Self { recipes }
    }
}

impl<'de> Deserialize<'de> for RecipeCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match CatalogInput::deserialize(deserializer)? {
            CatalogInput::Map(recipes) => Self { recipes },
            CatalogInput::List(records) => records.into_iter().collect(),
        })
    }
}

impl From<RecipeCatalog> for HashMap<String, Vec<String>> {
    fn from(catalog: RecipeCatalog) -> Self {
        catalog.recipes
    }
}

/// Build the shopping list for a weekly plan
///
/// Days are walked Monday to Sunday. Titles missing from the catalog are
/// skipped, since plans may point at deleted or renamed recipes.
pub fn consolidate(
    plan: &WeeklyPlan,
    catalog: &RecipeCatalog,
    multiplier: Multiplier,
) -> Vec<ShoppingItem> {
    let mut lines: Vec<&str> = Vec::new();

    for (day, titles) in plan.iter() {
        for title in titles {
            match catalog.ingredients(title) {
                Some(ingredients) => lines.extend(ingredients.iter().map(String::as_str)),
                None => debug!("Skipping '{}' on {}: recipe not in catalog", title, day_key(day)),
            }
        }
    }

    consolidate_lines(&lines, multiplier)
}

/// Merge a flat list of ingredient lines into rounded, sorted shopping items
pub fn consolidate_lines<S: AsRef<str>>(lines: &[S], multiplier: Multiplier) -> Vec<ShoppingItem> {
    let mut accumulator = Accumulator::default();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        accumulator.add_line(line, multiplier);
    }

    let items = accumulator.into_items();
    info!("Consolidated {} ingredient lines into {} shopping items", lines.len(), items.len());
    items
}

impl Accumulator {
    fn add_line(&mut self, line: &str, multiplier: Multiplier) {
        let parsed = parse_ingredient_line(line);
        let name = merge_key(&parsed.name);
        let quantity = parsed.quantity * multiplier.value();

        let key = match self.entries.get(&name) {
            Some(existing) if !can_merge(&existing.unit, &parsed.unit) => {
                self.split_key(&name, &parsed.unit)
            }
            _ => name,
        };

        match self.entries.get_mut(&key) {
            Some(existing) => {
                let added = convert(quantity, &parsed.unit, &existing.unit);
                debug!("Merging '{}' into '{}': +{} {}", line, key, added, existing.unit);
                existing.quantity += added;
                if parsed.name < existing.text {
                    existing.text = parsed.name;
                }
            }
            None => {
                let entry = Entry {
                    quantity,
                    category: categorize(&key_name(&key)),
                    unit: parsed.unit,
                    text: parsed.name,
                };
                debug!("New entry '{}' from '{}'", key, line);
                self.order.push(key.clone());
                self.entries.insert(key, entry);
            }
        }
    }

    /// Key for an ingredient whose unit clashes with the primary entry
    ///
    /// Reuses an existing split entry in a compatible unit so that "200 g"
    /// and "0.5 kg" still meet even when the primary entry is in cups.
    fn split_key(&self, name: &str, unit: &Unit) -> String {
        family(unit)
            .iter()
            .map(|member| format!("{}_{}", name, member.token()))
            .find(|candidate| self.entries.contains_key(candidate))
            .unwrap_or_else(|| format!("{}_{}", name, unit.token()))
    }

    fn into_items(mut self) -> Vec<ShoppingItem> {
        let mut taken = HashSet::new();
        let mut items = Vec::with_capacity(self.order.len());

        for key in &self.order {
            let Some(entry) = self.entries.remove(key) else {
                continue;
            };
            let id = generate_item_id(&taken);
            taken.insert(id.clone());

            let quantity = round_to_commercial(entry.quantity, &entry.unit);
            items.push(
                ShoppingItem::new(&id, &entry.text, entry.category)
                    .with_quantity(quantity, entry.unit)
                    .from_recipe(),
            );
        }

        sort_items(&mut items);
        items
    }
}

/// Normalized name, or the lower-cased raw name when normalization leaves nothing
fn merge_key(name: &str) -> String {
    let key = normalize_name(name);
    if key.is_empty() {
        name.trim().to_lowercase()
    } else {
        key
    }
}

fn can_merge(existing: &Unit, incoming: &Unit) -> bool {
    existing == incoming || are_compatible(existing, incoming)
}

/// Units that merge with `unit`
fn family(unit: &Unit) -> Vec<Unit> {
    if unit.is_weight() {
        vec![Unit::Gram, Unit::Kilogram]
    } else if unit.is_volume() {
        vec![Unit::Milliliter, Unit::Liter]
    } else {
        vec![unit.clone()]
    }
}

/// Strip the unit suffix from a split key
fn key_name(key: &str) -> String {
    key.split('_').next().unwrap_or_default().to_string()
}

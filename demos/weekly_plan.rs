//! # Weekly Plan Example
//!
//! This example builds a shopping list from a small bilingual meal plan,
//! edits it the way a shopper would (check items off, add a manual item,
//! double the servings) and prints every export format.

use chrono::Weekday;
use mealplan_shopping::consolidation::{consolidate, RecipeCatalog, WeeklyPlan};
use mealplan_shopping::export::{export_to_text, mailto_url, print_html, whatsapp_share_url};
use mealplan_shopping::ingredient_model::Multiplier;
use mealplan_shopping::localization::{Language, Localizer};
use mealplan_shopping::shopping_list::{
    add_manual_item, apply_global_multiplier, clear_checked_items, get_progress, toggle_item,
    NewItem,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🛒 Weekly Shopping List Example");
    println!("===============================\n");

    let catalog = RecipeCatalog::new()
        .with_recipe(
            "Tomato Soup",
            &["500 g tomatoes", "1 onion", "2 tbsp olive oil", "sal al gusto"],
        )
        .with_recipe(
            "Arroz con pollo",
            &[
                "2 tazas de arroz",
                "1/2 kg pollo",
                "1 cebolla picada",
                "3 dientes de ajo",
                "200 g arroz",
            ],
        )
        .with_recipe(
            "Tortilla",
            &["6 huevos", "4 patatas", "1 cebolla (grande)", "100 ml aceite de oliva"],
        );

    let plan = WeeklyPlan::new()
        .with_day(Weekday::Mon, &["Tomato Soup"])
        .with_day(Weekday::Wed, &["Arroz con pollo"])
        .with_day(Weekday::Fri, &["Tortilla", "Tomato Soup"]);

    // Example 1: consolidate the week
    println!("📖 Example 1: Consolidation");
    println!("---------------------------");
    let items = consolidate(&plan, &catalog, Multiplier::default());
    for item in &items {
        println!("  [{:?}] {}", item.category, item);
    }
    println!();

    // Example 2: shop for it
    println!("✅ Example 2: Checking items off");
    println!("--------------------------------");
    let mut list = add_manual_item(&items, NewItem::new("Papel de cocina"));
    for id in items.iter().take(3).map(|item| item.id.clone()) {
        list = toggle_item(&list, &id);
    }
    println!("  Progress: {}", get_progress(&list));
    let remaining = clear_checked_items(&list);
    println!("  {} items left after clearing checked ones\n", remaining.len());

    // Example 3: double everything
    println!("✖️  Example 3: Serving multiplier x2");
    println!("-----------------------------------");
    let doubled = apply_global_multiplier(&items, Multiplier::new(2.0)?);
    for item in &doubled {
        println!("  {}", item);
    }
    println!();

    // Example 4: exports
    println!("📤 Example 4: Exports");
    println!("---------------------");
    let localizer = Localizer::new(Language::Spanish);
    let text = export_to_text(&list, &localizer);
    println!("{}\n", text);
    println!("WhatsApp: {}\n", whatsapp_share_url(&text));
    println!("Mailto: {}\n", mailto_url(&localizer.get_message("email-subject"), &text));
    println!("{}", print_html(&localizer.get_message("print-title"), &text));

    Ok(())
}

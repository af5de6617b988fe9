use anyhow::{Context, Result};
use mealplan_shopping::config::{load_json, ExportFormat, ShoppingConfig};
use mealplan_shopping::consolidation::{consolidate, RecipeCatalog, WeeklyPlan};
use mealplan_shopping::export::{export_to_text, mailto_url, print_html, whatsapp_share_url};
use mealplan_shopping::localization::Localizer;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = ShoppingConfig::from_env()
        .context("Invalid shopping configuration")?
        .with_args(env::args().skip(1));

    init_logging(config.json_logs);
    info!(
        plan = %config.plan_path.display(),
        recipes = %config.recipes_path.display(),
        multiplier = config.multiplier.value(),
        "Building shopping list"
    );

    let plan: WeeklyPlan = load_json(&config.plan_path).context("Failed to load weekly plan")?;
    let catalog: RecipeCatalog =
        load_json(&config.recipes_path).context("Failed to load recipe catalog")?;
    debug!(slots = plan.slot_count(), recipes = catalog.len(), "Inputs loaded");

    let items = consolidate(&plan, &catalog, config.multiplier);
    info!(items = items.len(), "Shopping list ready");

    let localizer = Localizer::new(config.language);
    let text = export_to_text(&items, &localizer);

    let output = match config.export_format {
        ExportFormat::Text => text,
        ExportFormat::Json => {
            serde_json::to_string_pretty(&items).context("Failed to serialize items")?
        }
        ExportFormat::WhatsApp => whatsapp_share_url(&text),
        ExportFormat::Mailto => mailto_url(&localizer.get_message("email-subject"), &text),
        ExportFormat::Html => print_html(&localizer.get_message("print-title"), &text),
    };

    println!("{}", output);
    Ok(())
}

/// Install the tracing subscriber; `log` records from the library are bridged in
fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

//! # Shopping List Export
//!
//! Renders a list as plain text and wraps that text for the share targets
//! (WhatsApp, e-mail, printing). Rendering is deterministic: the same items
//! in any order produce the same bytes, and item ids never appear.

use crate::ingredient_model::ShoppingItem;
use crate::localization::Localizer;
use crate::shopping_list::{get_progress, group_by_category};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in query parameters (RFC 3986 unreserved set)
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const UNCHECKED_MARK: &str = "☐";
const CHECKED_MARK: &str = "☑";

/// Render the list as grouped plain text
///
/// ```text
/// 🛒 Shopping list
///
/// 🥬 Fruits & vegetables
/// ☐ tomatoes (1000 g)
/// ☑ onion (2)
///
/// 1/2 (50%)
/// ```
pub fn export_to_text(items: &[ShoppingItem], localizer: &Localizer) -> String {
    let mut sections = vec![localizer.get_message("list-title")];

    for (category, group) in group_by_category(items) {
        let header = format!("{} {}", category.emoji(), localizer.category_label(category));
        let mut lines = vec![header];
        lines.extend(group.iter().map(item_line));
        sections.push(lines.join("\n"));
    }

    let progress = get_progress(items);
    sections.push(localizer.get_message_with_args(
        "list-progress",
        &[
            ("checked", &progress.checked.to_string()),
            ("total", &progress.total.to_string()),
            ("percent", &progress.percent.to_string()),
        ],
    ));

    sections.join("\n\n")
}

fn item_line(item: &ShoppingItem) -> String {
    let mark = if item.checked { CHECKED_MARK } else { UNCHECKED_MARK };
    format!("{} {}", mark, item)
}

/// Share link that opens WhatsApp with the text prefilled
pub fn whatsapp_share_url(text: &str) -> String {
    format!("https://wa.me/?text={}", encode_query(text))
}

/// `mailto:` link with subject and body prefilled
pub fn mailto_url(subject: &str, text: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        encode_query(subject),
        encode_query(text)
    )
}

/// Minimal printable HTML page holding the text
pub fn print_html(title: &str, text: &str) -> String {
    let title = escape_html(title);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <style>body {{ font-family: sans-serif; }} \
         pre {{ white-space: pre-wrap; font-size: 14pt; }}</style>\n\
         </head>\n<body onload=\"window.print()\">\n<pre>{}</pre>\n</body>\n</html>\n",
        title,
        escape_html(text)
    )
}

fn encode_query(text: &str) -> String {
    utf8_percent_encode(text, QUERY_ENCODE_SET).to_string()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient_model::{Category, Unit};
    use crate::localization::Language;

    fn sample_list() -> Vec<ShoppingItem> {
        vec![
            ShoppingItem::new("id-1", "tomatoes", Category::FruitsVegetables)
                .with_quantity(1000.0, Unit::Gram),
            ShoppingItem::new("id-2", "onion", Category::FruitsVegetables)
                .with_quantity(2.0, Unit::Piece),
            ShoppingItem::new("id-3", "olive oil", Category::Pantry)
                .with_quantity(4.0, Unit::Tablespoon)
                .with_note("extra virgin"),
        ]
    }

    #[test]
    fn test_export_to_text_layout() {
        let localizer = Localizer::new(Language::English);
        let mut items = sample_list();
        items[1].checked = true;

        let text = export_to_text(&items, &localizer);
        let expected = "🛒 Shopping list\n\n\
                        🥬 Fruits & vegetables\n☑ onion (2)\n☐ tomatoes (1000 g)\n\n\
                        🥫 Pantry\n☐ olive oil (4 tbsp) - extra virgin\n\n\
                        1/3 (33%)";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_export_is_order_independent_and_hides_ids() {
        let localizer = Localizer::new(Language::Spanish);
        let items = sample_list();
        let mut reversed = items.clone();
        reversed.reverse();

        let text = export_to_text(&items, &localizer);
        assert_eq!(text, export_to_text(&reversed, &localizer));
        assert!(!text.contains("id-"));
        assert!(text.starts_with("🛒 Lista de la compra"));
    }

    #[test]
    fn test_export_empty_list() {
        let localizer = Localizer::new(Language::English);
        assert_eq!(export_to_text(&[], &localizer), "🛒 Shopping list\n\n0/0 (0%)");
    }

    #[test]
    fn test_whatsapp_share_url() {
        assert_eq!(
            whatsapp_share_url("Leche (1 L)\n☐ pan"),
            "https://wa.me/?text=Leche%20%281%20L%29%0A%E2%98%90%20pan"
        );
    }

    #[test]
    fn test_mailto_url() {
        assert_eq!(
            mailto_url("Compra & cena", "a=b"),
            "mailto:?subject=Compra%20%26%20cena&body=a%3Db"
        );
    }

    #[test]
    fn test_print_html_escapes() {
        let html = print_html("List <1>", "salt & \"pepper\"");
        assert!(html.contains("<title>List &lt;1&gt;</title>"));
        assert!(html.contains("<pre>salt &amp; &quot;pepper&quot;</pre>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}

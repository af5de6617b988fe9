#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use mealplan_shopping::consolidation::{
        consolidate, consolidate_lines, RecipeCatalog, WeeklyPlan,
    };
    use mealplan_shopping::ingredient_model::{Category, Multiplier, ShoppingItem, Unit};
    use mealplan_shopping::presentation::round_to_commercial;
    use mealplan_shopping::text_processing::normalize_name;

    fn without_ids(items: &[ShoppingItem]) -> Vec<ShoppingItem> {
        items
            .iter()
            .cloned()
            .map(|mut item| {
                item.id.clear();
                item
            })
            .collect()
    }

    fn tomato_soup_week() -> (WeeklyPlan, RecipeCatalog) {
        let plan: WeeklyPlan = serde_json::from_str(r#"{"monday": ["Tomato Soup"]}"#).unwrap();
        let catalog = RecipeCatalog::new()
            .with_recipe("Tomato Soup", &["500 g tomatoes", "1 onion", "2 tbsp olive oil"]);
        (plan, catalog)
    }

    #[test]
    fn test_tomato_soup_doubled() {
        let (plan, catalog) = tomato_soup_week();
        let items = consolidate(&plan, &catalog, Multiplier::new(2.0).unwrap());

        assert_eq!(items.len(), 3);

        let tomatoes = items.iter().find(|i| i.text == "tomatoes").unwrap();
        assert_eq!(tomatoes.quantity, Some(1000.0));
        assert_eq!(tomatoes.unit, Some(Unit::Gram));
        assert_eq!(tomatoes.category, Category::FruitsVegetables);

        let onion = items.iter().find(|i| i.text == "onion").unwrap();
        assert_eq!(onion.quantity, Some(2.0));
        assert_eq!(onion.unit, Some(Unit::Piece));

        let oil = items.iter().find(|i| i.text == "olive oil").unwrap();
        assert_eq!(oil.quantity, Some(4.0));
        assert_eq!(oil.unit, Some(Unit::Tablespoon));
        assert_eq!(oil.category, Category::Pantry);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let lines = [
            "500 g tomatoes",
            "2 cups rice",
            "1 onion",
            "200 g rice",
            "300 g tomatoes",
            "2 tbsp olive oil",
            "1 cebolla picada",
            "2 Cebolla (grande)",
            "1 ONION, diced",
            "sal al gusto",
            "1 大蒜",
            "2 生姜",
        ];
        let mut reversed = lines.to_vec();
        reversed.reverse();
        let mut rotated = lines.to_vec();
        rotated.rotate_left(3);

        let one = Multiplier::default();
        let expected = without_ids(&consolidate_lines(&lines, one));
        assert_eq!(without_ids(&consolidate_lines(&reversed, one)), expected);
        assert_eq!(without_ids(&consolidate_lines(&rotated, one)), expected);
    }

    #[test]
    fn test_merged_spelling_is_order_independent() {
        let one = Multiplier::default();
        let forward = consolidate_lines(&["1 Cebolla picada", "1 cebolla (grande)"], one);
        let backward = consolidate_lines(&["1 cebolla (grande)", "1 Cebolla picada"], one);

        assert_eq!(without_ids(&forward), without_ids(&backward));
        assert_eq!(forward[0].quantity, Some(2.0));
    }

    #[test]
    fn test_non_latin_ingredients_are_not_collapsed() {
        let items = consolidate_lines(&["1 大蒜", "2 生姜", "1 лук"], Multiplier::default());
        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();

        assert_eq!(items.len(), 3);
        assert!(texts.contains(&"大蒜"));
        assert!(texts.contains(&"生姜"));
        assert!(texts.contains(&"лук"));
    }

    #[test]
    fn test_compatible_units_are_additive() {
        let items = consolidate_lines(&["500 g flour", "0.5 kg flour"], Multiplier::default());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, Some(1000.0));
        assert_eq!(items[0].unit, Some(Unit::Gram));

        let items = consolidate_lines(&["1 l leche", "250 ml leche"], Multiplier::default());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, Some(1.3));
        assert_eq!(items[0].unit, Some(Unit::Liter));
    }

    #[test]
    fn test_incompatible_units_never_merge() {
        let items = consolidate_lines(&["2 cups rice", "200 g rice"], Multiplier::default());
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.text == "rice"));
    }

    #[test]
    fn test_cross_language_names_do_not_merge() {
        let catalog = RecipeCatalog::new()
            .with_recipe("Sopa", &["1 cebolla"])
            .with_recipe("Soup", &["1 onion"]);
        let plan = WeeklyPlan::new()
            .with_day(Weekday::Mon, &["Sopa"])
            .with_day(Weekday::Tue, &["Soup"]);

        let items = consolidate(&plan, &catalog, Multiplier::default());
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.quantity == Some(1.0)));
    }

    #[test]
    fn test_unparseable_lines_degrade() {
        let lines = ["sal al gusto", "½ something odd", "1/0 huevos"];
        let items = consolidate_lines(&lines, Multiplier::default());
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.quantity == Some(1.0)));
    }

    #[test]
    fn test_normalize_name_is_idempotent() {
        let samples = [
            "2 Tomates (maduros), pelados",
            "Ajo picado fresco",
            "   Pimienta   NEGRA   ",
            "crème brûlée",
            "de del la el en",
            "a,b,c",
        ];
        for sample in samples {
            let once = normalize_name(sample);
            assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn test_count_rounding_never_reaches_zero() {
        assert_eq!(round_to_commercial(0.2, &Unit::Piece), 1.0);
        assert_eq!(round_to_commercial(0.001, &Unit::Clove), 1.0);
        assert!(round_to_commercial(0.001, &Unit::Gram) > 0.0);
    }

    #[test]
    fn test_recipe_catalog_from_records() {
        let catalog: RecipeCatalog = serde_json::from_str(
            r#"[
                {"title": "Tomato Soup", "ingredients": ["500 g tomatoes"]},
                {"title": "Empty"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.ingredients("Empty"), Some(&[][..]));
    }
}

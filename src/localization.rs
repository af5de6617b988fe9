//! # Localization
//!
//! English and Spanish labels for exported shopping lists, backed by Fluent
//! resources compiled into the binary. Lookups fall back to English and then
//! to a visible "Missing translation" marker, so rendering never fails.

use crate::errors::ShoppingError;
use crate::ingredient_model::Category;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use log::warn;
use std::collections::HashMap;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

const EN_RESOURCE: &str = include_str!("../locales/en/main.ftl");
const ES_RESOURCE: &str = include_str!("../locales/es/main.ftl");

/// Supported output languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    English,
    #[default]
    Spanish,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    fn resource(self) -> &'static str {
        match self {
            Language::English => EN_RESOURCE,
            Language::Spanish => ES_RESOURCE,
        }
    }
}

impl FromStr for Language {
    type Err = ShoppingError;

    /// Accepts "en"/"es" and regional variants like "es-MX"
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_lowercase().as_str() {
            "en" => Ok(Language::English),
            "es" => Ok(Language::Spanish),
            _ => Err(ShoppingError::Localization(format!("unsupported language '{}'", code))),
        }
    }
}

/// Message lookup for one active language
pub struct Localizer {
    language: Language,
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl Localizer {
    /// Build bundles for the requested language and the English fallback
    pub fn new(language: Language) -> Self {
        let mut bundles = HashMap::new();
        for lang in [Language::English, language] {
            bundles.entry(lang).or_insert_with(|| Self::create_bundle(lang));
        }

        Self { language, bundles }
    }

    fn create_bundle(language: Language) -> FluentBundle<FluentResource> {
        let locale: LanguageIdentifier = language.code().parse().unwrap_or_default();
        let mut bundle = FluentBundle::new(vec![locale]);
        // Exports must be plain text, without Unicode bidi isolation marks
        bundle.set_use_isolating(false);

        let resource = match FluentResource::try_new(language.resource().to_string()) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                warn!("{} parse errors in '{}' resource", errors.len(), language.code());
                resource
            }
        };
        if let Err(errors) = bundle.add_resource(resource) {
            warn!("Failed to add '{}' resource: {:?}", language.code(), errors);
        }

        bundle
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Get a localized message
    pub fn get_message(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Get a localized message with simple string arguments
    pub fn get_message_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    /// Header label for a category
    pub fn category_label(&self, category: Category) -> String {
        self.get_message(&format!("category-{}", category.tag()))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        for language in [self.language, Language::English] {
            let Some(bundle) = self.bundles.get(&language) else {
                continue;
            };
            let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
                continue;
            };

            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if !errors.is_empty() {
                warn!("Errors formatting '{}': {:?}", key, errors);
            }
            return value.into_owned();
        }

        format!("Missing translation: {}", key)
    }
}

//! # Configuration Module
//!
//! Runtime settings for the command-line tool, read from the environment
//! (and a `.env` file when present). Paths given on the command line take
//! precedence over the environment.

use crate::errors::ShoppingError;
use crate::ingredient_model::Multiplier;
use crate::localization::Language;
use anyhow::{Context, Result};
use log::debug;
use serde::de::DeserializeOwned;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// Defaults
pub const DEFAULT_PLAN_PATH: &str = "plan.json";
pub const DEFAULT_RECIPES_PATH: &str = "recipes.json";

// Environment variables
pub const PLAN_PATH_VAR: &str = "SHOPPING_PLAN_PATH";
pub const RECIPES_PATH_VAR: &str = "SHOPPING_RECIPES_PATH";
pub const MULTIPLIER_VAR: &str = "SHOPPING_MULTIPLIER";
pub const LANGUAGE_VAR: &str = "SHOPPING_LANGUAGE";
pub const EXPORT_FORMAT_VAR: &str = "SHOPPING_EXPORT_FORMAT";
pub const LOG_FORMAT_VAR: &str = "SHOPPING_LOG_FORMAT";

/// How the consolidated list is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Grouped plain text
    #[default]
    Text,
    /// The shopping items as JSON
    Json,
    /// WhatsApp share link
    WhatsApp,
    /// `mailto:` link
    Mailto,
    /// Printable HTML page
    Html,
}

impl FromStr for ExportFormat {
    type Err = ShoppingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "whatsapp" => Ok(ExportFormat::WhatsApp),
            "mailto" | "email" => Ok(ExportFormat::Mailto),
            "html" | "print" => Ok(ExportFormat::Html),
            _ => Err(ShoppingError::UnknownExportFormat(name.to_string())),
        }
    }
}

/// Configuration for one CLI run
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingConfig {
    /// Weekly plan JSON file
    pub plan_path: PathBuf,
    /// Recipe catalog JSON file
    pub recipes_path: PathBuf,
    /// Global serving multiplier
    pub multiplier: Multiplier,
    /// Language of exported labels
    pub language: Language,
    pub export_format: ExportFormat,
    /// Emit JSON log lines instead of human-readable ones
    pub json_logs: bool,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            plan_path: PathBuf::from(DEFAULT_PLAN_PATH),
            recipes_path: PathBuf::from(DEFAULT_RECIPES_PATH),
            multiplier: Multiplier::default(),
            language: Language::default(),
            export_format: ExportFormat::default(),
            json_logs: false,
        }
    }
}

impl ShoppingConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(PLAN_PATH_VAR) {
            config.plan_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(RECIPES_PATH_VAR) {
            config.recipes_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(MULTIPLIER_VAR) {
            let value: f64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} is not a number: '{}'", MULTIPLIER_VAR, raw))?;
            config.multiplier = Multiplier::new(value)?;
        }
        if let Some(code) = lookup(LANGUAGE_VAR) {
            config.language = code.parse()?;
        }
        if let Some(name) = lookup(EXPORT_FORMAT_VAR) {
            config.export_format = name.parse()?;
        }
        if let Some(format) = lookup(LOG_FORMAT_VAR) {
            config.json_logs = format.trim().eq_ignore_ascii_case("json");
        }

        Ok(config)
    }

    /// Override the input paths with positional arguments (plan, then recipes)
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        if let Some(plan) = args.next() {
            self.plan_path = PathBuf::from(plan);
        }
        if let Some(recipes) = args.next() {
            self.recipes_path = PathBuf::from(recipes);
        }
        self
    }
}

/// Read and deserialize a JSON input file (weekly plan or recipe catalog)
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Loading {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ShoppingConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ShoppingConfig::default());
        assert_eq!(config.language, Language::Spanish);
        assert_eq!(config.export_format, ExportFormat::Text);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ShoppingConfig::from_lookup(lookup_from(&[
            (PLAN_PATH_VAR, "week.json"),
            (RECIPES_PATH_VAR, "book.json"),
            (MULTIPLIER_VAR, "2.5"),
            (LANGUAGE_VAR, "en"),
            (EXPORT_FORMAT_VAR, "WhatsApp"),
            (LOG_FORMAT_VAR, "json"),
        ]))
        .unwrap();

        assert_eq!(config.plan_path, PathBuf::from("week.json"));
        assert_eq!(config.recipes_path, PathBuf::from("book.json"));
        assert_eq!(config.multiplier.value(), 2.5);
        assert_eq!(config.language, Language::English);
        assert_eq!(config.export_format, ExportFormat::WhatsApp);
        assert!(config.json_logs);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(ShoppingConfig::from_lookup(lookup_from(&[(MULTIPLIER_VAR, "lots")])).is_err());
        assert!(ShoppingConfig::from_lookup(lookup_from(&[(MULTIPLIER_VAR, "11")])).is_err());
        assert!(ShoppingConfig::from_lookup(lookup_from(&[(LANGUAGE_VAR, "de")])).is_err());
        assert!(ShoppingConfig::from_lookup(lookup_from(&[(EXPORT_FORMAT_VAR, "pdf")])).is_err());
    }

    #[test]
    fn test_load_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_json::<HashMap<String, Vec<String>>>(&path).unwrap_err();
        assert!(err.to_string().contains("plan.json"));
        let missing = dir.path().join("missing.json");
        assert!(load_json::<HashMap<String, Vec<String>>>(&missing).is_err());
    }

    #[test]
    fn test_args_override_paths() {
        let config = ShoppingConfig::default().with_args(vec!["a.json".to_string()]);
        assert_eq!(config.plan_path, PathBuf::from("a.json"));
        assert_eq!(config.recipes_path, PathBuf::from(DEFAULT_RECIPES_PATH));
    }
}

//! # Meal-Plan Shopping List
//!
//! Turns a weekly meal plan and its recipes into one consolidated, rounded
//! and aisle-ordered shopping list, then lets the list be edited, checked
//! off and exported.
//!
//! The pipeline for each ingredient line is parse → normalize → classify →
//! merge, followed by commercial rounding and sorting once every line has
//! been seen. All of it is synchronous and pure; malformed text degrades to
//! a best-effort item instead of an error.

pub mod categorization;
pub mod config;
pub mod consolidation;
pub mod errors;
pub mod export;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod localization;
pub mod measurement_patterns;
pub mod presentation;
pub mod shopping_list;
pub mod text_processing;
pub mod unit_conversion;

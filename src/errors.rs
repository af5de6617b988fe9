//! # Error Types Module
//!
//! The consolidation core never fails on malformed text. These errors cover
//! caller contract violations and the configuration/export surface.

/// Custom error types for shopping list operations
#[derive(Debug, Clone, PartialEq)]
pub enum ShoppingError {
    /// Global multiplier outside `(0, 10]`
    InvalidMultiplier(f64),
    /// Export format name not recognized
    UnknownExportFormat(String),
    /// Localization bundle could not be built
    Localization(String),
}

impl std::fmt::Display for ShoppingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShoppingError::InvalidMultiplier(value) => {
                write!(f, "Invalid multiplier {value}: must be greater than 0 and at most 10")
            }
            ShoppingError::UnknownExportFormat(name) => write!(f, "Unknown export format: {name}"),
            ShoppingError::Localization(msg) => write!(f, "Localization error: {msg}"),
        }
    }
}

impl std::error::Error for ShoppingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ShoppingError::InvalidMultiplier(0.0).to_string(),
            "Invalid multiplier 0: must be greater than 0 and at most 10"
        );
        assert_eq!(
            ShoppingError::UnknownExportFormat("pdf".to_string()).to_string(),
            "Unknown export format: pdf"
        );
    }
}

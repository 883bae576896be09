//! Parse-with-default helpers for free-text numeric input fields.
//!
//! Count/margin/dimension fields come from text boxes; a non-numeric value
//! is recovered locally by substituting the field's default instead of
//! propagating an error.

use tracing::debug;

/// Parses a workpiece count field; empty or invalid input yields 0.
pub fn parse_count_field(text: &str) -> u32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.parse().unwrap_or_else(|_| {
        debug!("Invalid count field {:?}, substituting 0", text);
        0
    })
}

/// Parses a dimension or margin field; empty or invalid input yields
/// `default`.
pub fn parse_dimension_field(text: &str, default: f64) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return default;
    }
    trimmed.parse().unwrap_or_else(|_| {
        debug!(
            "Invalid dimension field {:?}, substituting {}",
            text, default
        );
        default
    })
}

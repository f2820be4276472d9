use crate::domain::model::Element;
use crate::utils::error::{InterpretError, Result};
use std::collections::BTreeMap;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InterpretError::InvalidInput {
            message: format!("{} must not be empty", field_name),
        });
    }
    Ok(())
}

/// Every score key must name one of the five elements, compared
/// case-insensitively. The error lists all offending keys in their
/// original casing.
pub fn validate_element_keys(scores: &BTreeMap<String, f64>) -> Result<()> {
    let invalid: Vec<&str> = scores
        .keys()
        .filter(|key| key.parse::<Element>().is_err())
        .map(|key| key.as_str())
        .collect();

    if !invalid.is_empty() {
        return Err(InterpretError::InvalidInput {
            message: format!("Invalid elements in scores: {}", invalid.join(", ")),
        });
    }
    Ok(())
}

use crate::utils::error::InterpretError;
use crate::utils::validation::{validate_element_keys, validate_non_empty, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the five canonical elements used to tag scores and favorability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = InterpretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wood" => Ok(Element::Wood),
            "fire" => Ok(Element::Fire),
            "earth" => Ok(Element::Earth),
            "metal" => Ok(Element::Metal),
            "water" => Ok(Element::Water),
            _ => Err(InterpretError::InvalidInput {
                message: format!("unknown element: {}", s),
            }),
        }
    }
}

/// Normalized input expected from the upstream engines (BaZi pillars,
/// hexagram selection, element scoring, luck cycles).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretationInput {
    pub day_master: String,
    pub element_scores: BTreeMap<String, f64>,
    pub favorable_elements: Vec<String>,
    pub unfavorable_elements: Vec<String>,
    pub hexagram_name: String,
    pub hexagram_theme: String,
    pub luck_phase: String,
    #[serde(default)]
    pub seasonal_bias: Option<String>,
}

impl Validate for InterpretationInput {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_non_empty("day_master", &self.day_master)?;
        validate_non_empty("hexagram_name", &self.hexagram_name)?;
        validate_non_empty("hexagram_theme", &self.hexagram_theme)?;
        validate_element_keys(&self.element_scores)
    }
}

/// Final interpretation payload for app/UI consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretationOutput {
    pub title: String,
    pub summary: String,
    pub opportunities: Vec<String>,
    pub cautions: Vec<String>,
    pub action_focus: String,
}

/// One entry of a score ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedElement {
    pub element: String,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Med,
    High,
}

/// A presentational advice card derived from the element scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCard {
    pub id: String,
    pub title: String,
    pub why: String,
    pub what_to_do: Vec<String>,
    pub tags: Vec<String>,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_parses_case_insensitively() {
        assert_eq!("wood".parse::<Element>().unwrap(), Element::Wood);
        assert_eq!("FIRE".parse::<Element>().unwrap(), Element::Fire);
        assert_eq!("Water".parse::<Element>().unwrap(), Element::Water);
        assert!("aether".parse::<Element>().is_err());
        assert!("".parse::<Element>().is_err());
    }

    #[test]
    fn test_element_displays_lowercase() {
        assert_eq!(Element::Metal.to_string(), "metal");
        for element in Element::ALL {
            assert_eq!(element.to_string(), element.as_str());
        }
    }

    #[test]
    fn test_element_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Element::Earth).unwrap(), "\"earth\"");
        let parsed: Element = serde_json::from_str("\"water\"").unwrap();
        assert_eq!(parsed, Element::Water);
    }

    #[test]
    fn test_severity_serde_matches_report_wire_names() {
        assert_eq!(serde_json::to_string(&Severity::Med).unwrap(), "\"med\"");
    }
}

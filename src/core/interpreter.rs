use crate::core::{InterpretationInput, InterpretationOutput, Result};
use crate::utils::validation::Validate;
use std::collections::BTreeMap;

/// Generate a structured interpretation from deterministic rules.
///
/// Validation runs first and is the only way this can fail; rendering is
/// pure string templating over the validated input. Calling twice with
/// equal inputs yields equal outputs.
pub fn interpret(input: &InterpretationInput) -> Result<InterpretationOutput> {
    input.validate()?;

    let dominant = dominant_element(&input.element_scores);
    let favorable = join_or_none(&input.favorable_elements);
    let unfavorable = join_or_none(&input.unfavorable_elements);

    tracing::debug!(
        "interpreting day master '{}' (dominant: {})",
        input.day_master,
        dominant
    );

    let title = format!("{} | {} phase", input.hexagram_name, input.luck_phase);

    let mut summary_parts = vec![
        format!("Day Master: {}.", input.day_master),
        format!("Dominant elemental tone: {}.", dominant),
        format!("Hexagram theme: {}.", input.hexagram_theme),
        format!(
            "Supportive elements: {}; draining elements: {}.",
            favorable, unfavorable
        ),
    ];
    if let Some(bias) = &input.seasonal_bias {
        summary_parts.push(format!("Seasonal bias: {}.", bias));
    }

    let opportunities = vec![
        format!("Prioritize activities aligned with {} qualities.", favorable),
        format!(
            "Use the '{}' motif as a decision filter.",
            input.hexagram_theme
        ),
        "Make high-leverage decisions early in the day when clarity is highest.".to_string(),
    ];

    let cautions = vec![
        format!(
            "Avoid overcommitting in contexts dominated by {} dynamics.",
            unfavorable
        ),
        "Do not force outcomes; follow sequence and timing signals from the cycle.".to_string(),
    ];

    let action_focus = "Take one concrete step that strengthens your favorable element profile \
                        before initiating new commitments."
        .to_string();

    Ok(InterpretationOutput {
        title,
        summary: summary_parts.join(" "),
        opportunities,
        cautions,
        action_focus,
    })
}

// Ties go to the first maximum in iteration order, which for a BTreeMap
// is the lexicographically smallest tied key.
fn dominant_element(scores: &BTreeMap<String, f64>) -> &str {
    let mut best: Option<(&str, f64)> = None;
    for (key, &score) in scores {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((key.as_str(), score)),
        }
    }
    best.map(|(key, _)| key).unwrap_or("unknown")
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_dominant_element_picks_strict_maximum() {
        let scores = scores(&[("wood", 8.0), ("fire", 6.0), ("water", 5.0)]);
        assert_eq!(dominant_element(&scores), "wood");
    }

    #[test]
    fn test_dominant_element_of_empty_map_is_unknown() {
        assert_eq!(dominant_element(&BTreeMap::new()), "unknown");
    }

    #[test]
    fn test_dominant_element_ties_break_to_first_in_order() {
        assert_eq!(dominant_element(&scores(&[("fire", 5.0), ("water", 5.0)])), "fire");
        assert_eq!(dominant_element(&scores(&[("water", 5.0), ("earth", 5.0)])), "earth");
    }

    #[test]
    fn test_dominant_element_allows_negative_scores() {
        let scores = scores(&[("metal", -3.0), ("earth", -1.5)]);
        assert_eq!(dominant_element(&scores), "earth");
    }

    #[test]
    fn test_join_or_none() {
        assert_eq!(join_or_none(&[]), "none");
        assert_eq!(join_or_none(&["water".to_string()]), "water");
        assert_eq!(
            join_or_none(&["water".to_string(), "wood".to_string()]),
            "water, wood"
        );
    }
}

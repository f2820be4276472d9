//! Presentational score-analysis helpers: element rankings, an evenness
//! index, and rule-based advice cards. All pure functions over the same
//! score map the interpreter consumes; keys are not validated here.

use crate::domain::model::{RankedElement, ReportCard, Severity};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The `n` highest-scoring elements, best first. Ties keep map order.
pub fn top_n(scores: &BTreeMap<String, f64>, n: usize) -> Vec<RankedElement> {
    let mut ranked = rank(scores);
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}

/// The `n` lowest-scoring elements, weakest first. Ties keep map order.
pub fn bottom_n(scores: &BTreeMap<String, f64>, n: usize) -> Vec<RankedElement> {
    let mut ranked = rank(scores);
    ranked.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}

/// Evenness of the score distribution on a 0..=100 scale: 100 means every
/// element scores the same, 0 means extremely uneven (or no usable scores).
/// Computed as `1 - mean_abs_deviation / mean`, clamped at zero.
pub fn balance_index(scores: &BTreeMap<String, f64>) -> u32 {
    if scores.is_empty() {
        return 0;
    }

    let total: f64 = scores.values().sum();
    if total <= 0.0 {
        return 0;
    }

    let mean = total / scores.len() as f64;
    let deviation =
        scores.values().map(|value| (value - mean).abs()).sum::<f64>() / scores.len() as f64;

    let normalized = (1.0 - deviation / mean).max(0.0);
    (normalized * 100.0).round() as u32
}

/// Advice cards for the strongest and weakest elements. An empty score map
/// yields no cards; a single-entry map yields both cards for that element.
pub fn element_cards(scores: &BTreeMap<String, f64>) -> Vec<ReportCard> {
    let mut cards = Vec::new();

    if let Some(dominant) = top_n(scores, 1).into_iter().next() {
        cards.push(ReportCard {
            id: format!("dominant-{}", dominant.element.to_lowercase()),
            title: format!("Strong {} influence", dominant.element),
            why: format!(
                "{} is currently your highest-scoring element ({:.2}).",
                dominant.element, dominant.score
            ),
            what_to_do: vec![
                format!(
                    "Use {} strengths when planning your weekly priorities.",
                    dominant.element.to_lowercase()
                ),
                "Avoid over-indexing on one pattern; keep one balancing habit in place."
                    .to_string(),
            ],
            tags: vec!["elements".to_string(), "strength".to_string()],
            severity: Severity::Low,
        });
    }

    if let Some(weak) = bottom_n(scores, 1).into_iter().next() {
        cards.push(ReportCard {
            id: format!("weak-{}", weak.element.to_lowercase()),
            title: format!("Support weaker {}", weak.element),
            why: format!(
                "{} is your lowest element score ({:.2}), which may create blind spots over time.",
                weak.element, weak.score
            ),
            what_to_do: vec![
                format!(
                    "Choose one simple routine each week that reflects {} qualities.",
                    weak.element.to_lowercase()
                ),
                "Review monthly and adjust gradually instead of making abrupt shifts.".to_string(),
            ],
            tags: vec!["elements".to_string(), "balance".to_string()],
            severity: Severity::Med,
        });
    }

    cards
}

fn rank(scores: &BTreeMap<String, f64>) -> Vec<RankedElement> {
    scores
        .iter()
        .map(|(element, &score)| RankedElement {
            element: element.clone(),
            score,
        })
        .collect()
}

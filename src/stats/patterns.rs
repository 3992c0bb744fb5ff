use crate::draw::{MainSet, MAIN_COUNT};
use crate::filters::{continuous, odd_even, zones, ZONE3};
use serde::Serialize;
use std::collections::BTreeMap;
use strum::Display;

/// Fewer draws than this produce no patterns.
pub const MIN_PATTERN_DRAWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PatternKind {
    Consecutive,
    ZoneDistribution,
    OddEvenRatio,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PatternValue {
    Scalar(f64),
    /// Zone label to share of all main numbers, in percent.
    Shares(BTreeMap<&'static str, f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    #[serde(rename = "type")]
    pub kind: PatternKind,
    pub description: String,
    pub value: PatternValue,
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Averages over the window: adjacent pairs, zone shares, odd count.
pub fn identify(window: &[MainSet]) -> Vec<Pattern> {
    if window.len() < MIN_PATTERN_DRAWS {
        return Vec::new();
    }
    let draws = window.len() as f64;

    let mut pairs = 0usize;
    let mut odd = 0usize;
    let mut zone_totals = [0usize; ZONE3.len()];
    for main in window {
        let mut sorted = *main;
        sorted.sort_unstable();
        pairs += continuous::consecutive_pairs(&sorted).len();
        odd += odd_even::odd_count(&sorted) as usize;
        for (total, zone) in zone_totals.iter_mut().zip(zones::distribution(&sorted, &ZONE3)) {
            *total += zone.count as usize;
        }
    }

    let avg_pairs = pairs as f64 / draws;
    let avg_odd = odd as f64 / draws;
    let numbers = draws * MAIN_COUNT as f64;
    let shares: BTreeMap<&'static str, f64> = ZONE3
        .iter()
        .zip(zone_totals)
        .map(|(&(label, _, _), total)| (label, round1(total as f64 / numbers * 100.0)))
        .collect();

    let share_text = ZONE3
        .iter()
        .map(|&(label, _, _)| format!("{} {:.1}%", label, shares.get(label).copied().unwrap_or(0.0)))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        Pattern {
            kind: PatternKind::Consecutive,
            description: format!("Average of {:.1} consecutive pairs per draw", avg_pairs),
            value: PatternValue::Scalar(round1(avg_pairs)),
        },
        Pattern {
            kind: PatternKind::ZoneDistribution,
            description: format!("Zone shares: {}", share_text),
            value: PatternValue::Shares(shares),
        },
        Pattern {
            kind: PatternKind::OddEvenRatio,
            description: format!(
                "Average of {:.1} odd / {:.1} even numbers per draw",
                avg_odd,
                MAIN_COUNT as f64 - avg_odd
            ),
            value: PatternValue::Scalar(round1(avg_odd)),
        },
    ]
}

pub mod patterns;

use crate::draw::{sort_chronologically, DrawRecord, MainSet, MAIN_COUNT, POOL_MAX};
use crate::scoring::bands::round2;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{debug, warn};

pub use self::patterns::{Pattern, PatternKind, PatternValue};

/// Mean number of draws between two appearances of one number (37 / 7).
pub const EXPECTED_GAP: f64 = POOL_MAX as f64 / MAIN_COUNT as f64;
/// Overdue score reached when a number is exactly one expected gap late.
const OVERDUE_SCORE_MULTIPLIER: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LastSeen {
    /// Draws since the latest appearance; 0 = in the newest draw.
    Draws(u32),
    Never,
}

impl Serialize for LastSeen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LastSeen::Draws(n) => serializer.serialize_u32(*n),
            LastSeen::Never => serializer.serialize_str("Never"),
        }
    }
}

impl fmt::Display for LastSeen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastSeen::Draws(n) => write!(f, "{}", n),
            LastSeen::Never => write!(f, "Never"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberStats {
    pub number: u8,
    pub frequency: u32,
    pub last_seen: LastSeen,
    pub hot_score: f64,
    pub cold_score: f64,
    pub overdue_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry {
    pub number: u8,
    pub score: f64,
    pub frequency: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverdueEntry {
    pub number: u8,
    pub score: f64,
    pub last_seen: LastSeen,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub hot: Vec<FrequencyEntry>,
    pub cold: Vec<FrequencyEntry>,
    pub overdue: Vec<OverdueEntry>,
    pub patterns: Vec<Pattern>,
    pub draws_analyzed: usize,
    pub empty_dataset: bool,
}

/// Frequency, hot/cold and overdue figures over a window of recent draws.
#[derive(Debug, Clone)]
pub struct HistoricalStatistics {
    /// Main sets in the window, oldest first.
    window: Vec<MainSet>,
    numbers: Vec<NumberStats>,
}

impl HistoricalStatistics {
    /// `window`: how many of the most recent draws to look at (`None` = all).
    pub fn analyze(draws: &[DrawRecord], window: Option<usize>) -> Self {
        let mut ordered = draws.to_vec();
        sort_chronologically(&mut ordered);

        let keep = window.filter(|&w| w > 0).unwrap_or(ordered.len()).min(ordered.len());
        let window: Vec<MainSet> = ordered[ordered.len() - keep..]
            .iter()
            .map(|d| *d.main())
            .collect();

        let mut frequency = [0u32; POOL_MAX as usize + 1];
        let mut last_seen = [LastSeen::Never; POOL_MAX as usize + 1];
        for (age, main) in window.iter().rev().enumerate() {
            for &n in main {
                frequency[n as usize] += 1;
                if last_seen[n as usize] == LastSeen::Never {
                    last_seen[n as usize] = LastSeen::Draws(age as u32);
                }
            }
        }

        let max_frequency = frequency.iter().copied().max().unwrap_or(0);
        let numbers = (1..=POOL_MAX)
            .map(|n| {
                let freq = frequency[n as usize];
                let hot_score = if max_frequency > 0 {
                    freq as f64 / max_frequency as f64 * 100.0
                } else {
                    0.0
                };
                let seen = last_seen[n as usize];
                NumberStats {
                    number: n,
                    frequency: freq,
                    last_seen: seen,
                    hot_score,
                    cold_score: 100.0 - hot_score,
                    overdue_score: overdue_score(seen),
                }
            })
            .collect();

        if window.is_empty() {
            warn!("No historical draws available; statistics degrade to zero frequencies");
        } else {
            debug!(
                "Analyzed {} draws (max frequency {})",
                window.len(),
                max_frequency
            );
        }

        Self { window, numbers }
    }

    pub fn draws_analyzed(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// `None` outside 1..=37.
    pub fn number(&self, number: u8) -> Option<&NumberStats> {
        (number as usize).checked_sub(1).and_then(|i| self.numbers.get(i))
    }

    pub fn all_numbers(&self) -> &[NumberStats] {
        &self.numbers
    }

    pub fn hot_score(&self, number: u8) -> f64 {
        self.number(number).map_or(0.0, |s| s.hot_score)
    }

    /// Descending frequency, ties by number.
    pub fn hot(&self) -> Vec<FrequencyEntry> {
        let mut ranked: Vec<&NumberStats> = self.numbers.iter().collect();
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency).then(a.number.cmp(&b.number)));
        ranked
            .into_iter()
            .map(|s| FrequencyEntry {
                number: s.number,
                score: round2(s.hot_score),
                frequency: s.frequency,
            })
            .collect()
    }

    /// Ascending frequency (never-drawn numbers first), ties by number.
    pub fn cold(&self) -> Vec<FrequencyEntry> {
        let mut ranked: Vec<&NumberStats> = self.numbers.iter().collect();
        ranked.sort_by(|a, b| a.frequency.cmp(&b.frequency).then(a.number.cmp(&b.number)));
        ranked
            .into_iter()
            .map(|s| FrequencyEntry {
                number: s.number,
                score: round2(s.cold_score),
                frequency: s.frequency,
            })
            .collect()
    }

    /// Stalest first: score desc, then staleness, then number.
    pub fn overdue(&self) -> Vec<OverdueEntry> {
        let mut ranked: Vec<&NumberStats> = self.numbers.iter().collect();
        ranked.sort_by(|a, b| {
            b.overdue_score
                .total_cmp(&a.overdue_score)
                .then(b.last_seen.cmp(&a.last_seen))
                .then(a.number.cmp(&b.number))
        });
        ranked
            .into_iter()
            .map(|s| OverdueEntry {
                number: s.number,
                score: round2(s.overdue_score),
                last_seen: s.last_seen,
            })
            .collect()
    }

    pub fn patterns(&self) -> Vec<Pattern> {
        patterns::identify(&self.window)
    }

    /// Ranked lists truncated to `limit` entries each (`None` = all 37).
    pub fn insights(&self, limit: Option<usize>) -> Insights {
        let take = limit.unwrap_or(POOL_MAX as usize);
        let mut hot = self.hot();
        let mut cold = self.cold();
        let mut overdue = self.overdue();
        hot.truncate(take);
        cold.truncate(take);
        overdue.truncate(take);

        Insights {
            hot,
            cold,
            overdue,
            patterns: self.patterns(),
            draws_analyzed: self.draws_analyzed(),
            empty_dataset: self.is_empty(),
        }
    }
}

fn overdue_score(last_seen: LastSeen) -> f64 {
    match last_seen {
        LastSeen::Never => 100.0,
        LastSeen::Draws(gap) => (gap as f64 / EXPECTED_GAP * OVERDUE_SCORE_MULTIPLIER).min(100.0),
    }
}

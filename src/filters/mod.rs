pub mod continuous;
pub mod last_digits;
pub mod odd_even;
pub mod pull;
pub mod sum;
pub mod zones;

use crate::config::{Bounds, FilterConfig};
use crate::draw::MainSet;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use strum::{Display, EnumIter, IntoEnumIterator};

pub use self::zones::{ZoneCount, ZoneDetail, ZONE3, ZONE4};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FilterKind {
    Continuous,
    Zone3,
    Zone4,
    OddEven,
    Sum,
    LastDigits,
    Pull,
}

/// Raw numbers behind a verdict, enough to explain it to a human.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "filter", rename_all = "snake_case")]
pub enum VerdictDetail {
    Continuous {
        count: u8,
        pairs: Vec<(u8, u8)>,
        max: u8,
    },
    Zone3(ZoneDetail),
    Zone4(ZoneDetail),
    OddEven {
        odd: u8,
        even: u8,
        band: Bounds,
    },
    Sum {
        total: u32,
        min: u32,
        max: u32,
    },
    LastDigits {
        distribution: BTreeMap<u8, u8>,
        max_count: u8,
        limit: u8,
    },
    Pull {
        count: u8,
        shared: Vec<u8>,
        bounds: Bounds,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterVerdict {
    pub pass: bool,
    /// False only for Pull when there is no previous draw to compare with.
    pub evaluated: bool,
    pub detail: VerdictDetail,
}

impl FilterVerdict {
    pub fn new(pass: bool, detail: VerdictDetail) -> Self {
        Self {
            pass,
            evaluated: true,
            detail,
        }
    }

    pub fn skipped(detail: VerdictDetail) -> Self {
        Self {
            pass: true,
            evaluated: false,
            detail,
        }
    }
}

impl fmt::Display for FilterVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.evaluated {
            return write!(f, "not evaluated (no previous draw)");
        }
        let mark = if self.pass { "ok" } else { "FAIL" };
        match &self.detail {
            VerdictDetail::Continuous { count, pairs, max } => {
                let list = pairs
                    .iter()
                    .map(|(a, b)| format!("{}-{}", a, b))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{} | {} pair(s) [max {}] {}", mark, count, max, list)
            }
            VerdictDetail::Zone3(z) | VerdictDetail::Zone4(z) => {
                write!(f, "{} | {}", mark, z)
            }
            VerdictDetail::OddEven { odd, even, band } => {
                write!(f, "{} | {}:{} odd:even [odd {}]", mark, odd, even, band)
            }
            VerdictDetail::Sum { total, min, max } => {
                write!(f, "{} | sum {} [{}-{}]", mark, total, min, max)
            }
            VerdictDetail::LastDigits {
                distribution,
                max_count,
                limit,
            } => {
                let crowded = distribution
                    .iter()
                    .filter(|(_, c)| **c > 1)
                    .map(|(d, c)| format!("x{}:{}", d, c))
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(f, "{} | max {} [limit {}] {}", mark, max_count, limit, crowded)
            }
            VerdictDetail::Pull {
                count,
                shared,
                bounds,
            } => {
                write!(f, "{} | {} carried {:?} [{}]", mark, count, shared, bounds)
            }
        }
    }
}

/// Verdicts of every filter for one main set, keyed by filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Evaluation {
    verdicts: BTreeMap<FilterKind, FilterVerdict>,
}

impl Evaluation {
    pub fn get(&self, kind: FilterKind) -> Option<&FilterVerdict> {
        self.verdicts.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FilterKind, &FilterVerdict)> {
        self.verdicts.iter()
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// All evaluated filters pass. Skipped filters count as passing.
    pub fn overall_pass(&self) -> bool {
        self.verdicts.values().all(|v| v.pass)
    }

    pub fn passed_count(&self) -> usize {
        self.verdicts.values().filter(|v| v.pass).count()
    }
}

pub fn evaluate_filter(
    kind: FilterKind,
    main: &MainSet,
    previous: Option<&MainSet>,
    cfg: &FilterConfig,
) -> FilterVerdict {
    let mut sorted = *main;
    sorted.sort_unstable();
    match kind {
        FilterKind::Continuous => continuous::check(&sorted, cfg),
        FilterKind::Zone3 => zones::check_zone3(&sorted, cfg),
        FilterKind::Zone4 => zones::check_zone4(&sorted, cfg),
        FilterKind::OddEven => odd_even::check(&sorted, cfg),
        FilterKind::Sum => sum::check(&sorted, cfg),
        FilterKind::LastDigits => last_digits::check(&sorted, cfg),
        FilterKind::Pull => pull::check(&sorted, previous, cfg),
    }
}

/// Runs all seven filters. `previous` is the main set of the draw before.
pub fn evaluate(main: &MainSet, previous: Option<&MainSet>, cfg: &FilterConfig) -> Evaluation {
    let verdicts = FilterKind::iter()
        .map(|kind| (kind, evaluate_filter(kind, main, previous, cfg)))
        .collect();
    Evaluation { verdicts }
}

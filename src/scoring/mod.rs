pub mod bands;

use crate::config::FilterConfig;
use crate::draw::{MainSet, MAIN_COUNT, POOL_MAX};
use crate::filters::{self, Evaluation, FilterKind, FilterVerdict, VerdictDetail, ZoneDetail};
use crate::stats::HistoricalStatistics;
use serde::Serialize;
use std::collections::BTreeMap;
use strum::Display;

use self::bands::{band_score, centered_score, ceiling_score, round2};

/// Frequency sub-score when there is no history to compare with.
pub const NEUTRAL_FREQUENCY_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScoreComponent {
    Continuous,
    Zone3,
    Zone4,
    OddEven,
    Sum,
    LastDigits,
    Pull,
    Frequency,
}

impl ScoreComponent {
    pub const ALL: [ScoreComponent; 8] = [
        ScoreComponent::Continuous,
        ScoreComponent::Zone3,
        ScoreComponent::Zone4,
        ScoreComponent::OddEven,
        ScoreComponent::Sum,
        ScoreComponent::LastDigits,
        ScoreComponent::Pull,
        ScoreComponent::Frequency,
    ];
}

impl From<FilterKind> for ScoreComponent {
    fn from(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Continuous => ScoreComponent::Continuous,
            FilterKind::Zone3 => ScoreComponent::Zone3,
            FilterKind::Zone4 => ScoreComponent::Zone4,
            FilterKind::OddEven => ScoreComponent::OddEven,
            FilterKind::Sum => ScoreComponent::Sum,
            FilterKind::LastDigits => ScoreComponent::LastDigits,
            FilterKind::Pull => ScoreComponent::Pull,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub scores: BTreeMap<ScoreComponent, f64>,
    pub weights: BTreeMap<ScoreComponent, f64>,
    pub final_score: f64,
}

impl ScoreBreakdown {
    pub fn score(&self, component: ScoreComponent) -> f64 {
        self.scores.get(&component).copied().unwrap_or(0.0)
    }
}

fn zone_score(d: &ZoneDetail) -> f64 {
    if d.zones.is_empty() {
        return 0.0;
    }
    let (low, high) = (d.bounds.min as f64, d.bounds.max as f64);
    let total: f64 = d
        .zones
        .iter()
        .map(|z| {
            let expected = MAIN_COUNT as f64 * z.size() as f64 / POOL_MAX as f64;
            centered_score(z.count as f64, low, high, expected)
        })
        .sum();
    total / d.zones.len() as f64
}

/// Continuous 0..=100 score for one verdict. Failing verdicts score 0,
/// a Pull filter that could not be evaluated scores 100.
pub fn filter_score(verdict: &FilterVerdict) -> f64 {
    if !verdict.evaluated {
        return 100.0;
    }
    if !verdict.pass {
        return 0.0;
    }
    match &verdict.detail {
        VerdictDetail::Continuous { count, max, .. } => ceiling_score(*count as f64, *max as f64),
        VerdictDetail::Zone3(d) | VerdictDetail::Zone4(d) => zone_score(d),
        VerdictDetail::OddEven { odd, band, .. } => {
            band_score(*odd as f64, band.min as f64, band.max as f64)
        }
        VerdictDetail::Sum { total, min, max } => band_score(*total as f64, *min as f64, *max as f64),
        VerdictDetail::LastDigits {
            max_count, limit, ..
        } => ceiling_score(
            max_count.saturating_sub(1) as f64,
            limit.saturating_sub(1) as f64,
        ),
        VerdictDetail::Pull { count, bounds, .. } => {
            let expected = (MAIN_COUNT * MAIN_COUNT) as f64 / POOL_MAX as f64;
            centered_score(*count as f64, bounds.min as f64, bounds.max as f64, expected)
        }
    }
}

/// Mean hot score of the main numbers.
pub fn frequency_score(main: &MainSet, stats: &HistoricalStatistics) -> f64 {
    if stats.is_empty() {
        return NEUTRAL_FREQUENCY_SCORE;
    }
    main.iter().map(|&n| stats.hot_score(n)).sum::<f64>() / main.len() as f64
}

/// Σ score·weight / Σ weight over the components both maps share.
/// Zero weights drop out; if every weight is zero, or the weighted sums
/// overflow, the plain mean is used.
pub fn weighted_score(
    scores: &BTreeMap<ScoreComponent, f64>,
    weights: &BTreeMap<ScoreComponent, f64>,
) -> f64 {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (component, score) in scores {
        let w = weights.get(component).copied().unwrap_or(0.0);
        if w > 0.0 {
            numerator += score * w;
            denominator += w;
        }
    }
    let weighted = (denominator > 0.0)
        .then(|| numerator / denominator)
        .filter(|raw| raw.is_finite());
    let raw = match weighted {
        Some(raw) => raw,
        None => plain_mean(scores),
    };
    round2(raw.clamp(0.0, 100.0))
}

fn plain_mean(scores: &BTreeMap<ScoreComponent, f64>) -> f64 {
    let finite: Vec<f64> = scores.values().copied().filter(|s| s.is_finite()).collect();
    if finite.is_empty() {
        return 0.0;
    }
    finite.iter().sum::<f64>() / finite.len() as f64
}

/// Scores a main set whose filter verdicts are already known.
pub fn score_evaluation(
    main: &MainSet,
    evaluation: &Evaluation,
    stats: &HistoricalStatistics,
    cfg: &FilterConfig,
) -> ScoreBreakdown {
    let mut scores = BTreeMap::new();
    for (kind, verdict) in evaluation.iter() {
        scores.insert(ScoreComponent::from(*kind), round2(filter_score(verdict)));
    }
    scores.insert(ScoreComponent::Frequency, round2(frequency_score(main, stats)));

    let weights = ScoreComponent::ALL
        .iter()
        .map(|&c| (c, cfg.weight(c)))
        .collect();
    let final_score = weighted_score(&scores, &weights);

    ScoreBreakdown {
        scores,
        weights,
        final_score,
    }
}

/// Evaluates all filters against `previous`, then scores.
pub fn score(
    main: &MainSet,
    previous: Option<&MainSet>,
    cfg: &FilterConfig,
    stats: &HistoricalStatistics,
) -> ScoreBreakdown {
    let evaluation = filters::evaluate(main, previous, cfg);
    score_evaluation(main, &evaluation, stats, cfg)
}

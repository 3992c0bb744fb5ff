use crate::config::{FilterConfig, FilterConfigPatch};
use crate::draw::{DrawRecord, MainSet};
use crate::error::{LfResult, LotoError};
use crate::filters;
use crate::generator;
use crate::scoring::{self, ScoreBreakdown};
use crate::stats::{HistoricalStatistics, Insights, Pattern};
use crate::store::Dataset;
use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const MAX_CANDIDATES: usize = 100;
pub const REFERENCE_DRAWS: usize = 5;
pub const INSIGHT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionRequest {
    /// 1..=100.
    pub count: usize,
    /// Derived from the latest draw id when absent.
    pub next_draw_number: Option<u32>,
    /// Overrides merged key by key onto the caller's base config.
    pub filter_config: Option<FilterConfigPatch>,
    pub include_scoring: bool,
    pub include_patterns: bool,
    /// Statistics lookback in draws; `None` = whole history.
    pub window: Option<usize>,
    pub seed: Option<u64>,
    /// Candidates are dated one week after this. Defaults to the latest
    /// draw's date, or today on an empty dataset.
    pub reference_date: Option<NaiveDate>,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            count: 10,
            next_draw_number: None,
            filter_config: None,
            include_scoring: true,
            include_patterns: false,
            window: None,
            seed: None,
            reference_date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// 1-based position after ranking.
    pub rank: usize,
    /// 0-based position in generation order.
    pub generation_index: usize,
    /// Carries the filter verdicts as its evaluation.
    pub draw: DrawRecord,
    pub overall_pass: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoreBreakdown>,
}

impl Candidate {
    pub fn final_score(&self) -> Option<f64> {
        self.scoring.as_ref().map(|s| s.final_score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionBatch {
    pub next_draw_number: u32,
    pub candidates: Vec<Candidate>,
    /// Most recent historical draws, newest first.
    pub reference_draws: Vec<DrawRecord>,
    /// Candidates passing every evaluated filter.
    pub passing: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<Pattern>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Insights>,
    pub config: FilterConfig,
}

/// Latest draw number + 1, or 1 when nothing usable exists.
pub fn next_draw_number(dataset: &Dataset) -> u32 {
    dataset
        .latest()
        .and_then(DrawRecord::draw_number)
        .map(|n| n.saturating_add(1))
        .unwrap_or(1)
}

fn candidate_date(dataset: &Dataset, reference: Option<NaiveDate>) -> NaiveDate {
    let base = reference
        .or_else(|| dataset.latest().map(DrawRecord::date))
        .unwrap_or_else(|| Local::now().date_naive());
    base.checked_add_days(Days::new(7)).unwrap_or(base)
}

pub fn label(next_draw_number: u32, rank: usize) -> String {
    format!("{} candidate {}", next_draw_number, rank)
}

pub fn predict(
    dataset: &Dataset,
    request: &PredictionRequest,
    base: &FilterConfig,
) -> LfResult<PredictionBatch> {
    if request.count == 0 || request.count > MAX_CANDIDATES {
        return Err(LotoError::Validation(format!(
            "count must be between 1 and {}, got {}",
            MAX_CANDIDATES, request.count
        )));
    }

    let cfg = match &request.filter_config {
        Some(patch) => base.merged(patch),
        None => base.clone(),
    };
    cfg.validate()?;

    let stats = HistoricalStatistics::analyze(dataset.draws(), request.window);
    let previous: Option<MainSet> = dataset.latest().map(|d| *d.main());
    let draw_number = request
        .next_draw_number
        .unwrap_or_else(|| next_draw_number(dataset));
    let date = candidate_date(dataset, request.reference_date);

    let mut rng = match request.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    info!(
        "Generating {} candidates for draw {} ({} historical draws)",
        request.count,
        draw_number,
        dataset.len()
    );

    let mut scored = Vec::with_capacity(request.count);
    for (idx, (main, bonus)) in generator::generate_batch(&mut rng, request.count)
        .into_iter()
        .enumerate()
    {
        let evaluation = filters::evaluate(&main, previous.as_ref(), &cfg);
        let scoring = request
            .include_scoring
            .then(|| scoring::score_evaluation(&main, &evaluation, &stats, &cfg));
        scored.push((idx, main, bonus, evaluation, scoring));
    }

    if request.include_scoring {
        // Stable: ties keep generation order.
        scored.sort_by(|a, b| {
            let sa = a.4.as_ref().map_or(0.0, |s| s.final_score);
            let sb = b.4.as_ref().map_or(0.0, |s| s.final_score);
            sb.total_cmp(&sa)
        });
    }

    let mut candidates = Vec::with_capacity(scored.len());
    for (pos, (idx, main, bonus, evaluation, scoring)) in scored.into_iter().enumerate() {
        let rank = pos + 1;
        let overall_pass = evaluation.overall_pass();
        let draw = DrawRecord::new(label(draw_number, rank), date, main, bonus)?
            .with_evaluation(evaluation);
        candidates.push(Candidate {
            rank,
            generation_index: idx,
            draw,
            overall_pass,
            scoring,
        });
    }

    let passing = candidates.iter().filter(|c| c.overall_pass).count();
    debug!("{} of {} candidates pass every filter", passing, candidates.len());

    Ok(PredictionBatch {
        next_draw_number: draw_number,
        candidates,
        reference_draws: dataset.recent(REFERENCE_DRAWS),
        passing,
        patterns: request.include_patterns.then(|| stats.patterns()),
        insights: request
            .include_scoring
            .then(|| stats.insights(Some(INSIGHT_LIMIT))),
        config: cfg,
    })
}

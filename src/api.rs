use crate::config::FilterConfig;
use crate::draw::{DrawRecord, MainSet, RawDraw, POOL_MAX};
use crate::error::{LfResult, LotoError};
use crate::filters::{self, Evaluation};
use crate::loader;
use crate::predictor::{self, PredictionBatch, PredictionRequest};
use crate::stats::{HistoricalStatistics, Insights};
use crate::store::{Dataset, DrawStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

pub const SUMMARY_TOP: usize = 10;

/// Everything a front end (CLI, HTTP handler) needs between requests.
pub struct LotoForgeState {
    pub store: DrawStore,
    config: RwLock<FilterConfig>,
}

impl LotoForgeState {
    pub fn new(store: DrawStore, config: FilterConfig) -> Self {
        Self {
            store,
            config: RwLock::new(config),
        }
    }

    pub fn config(&self) -> FilterConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_config(&self, config: FilterConfig) -> LfResult<()> {
        config.validate()?;
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn dataset(&self) -> Arc<Dataset> {
        self.store.snapshot()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NumberCount {
    pub number: u8,
    pub count: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub total_draws: usize,
    pub most_common_main: Vec<NumberCount>,
    pub most_common_bonus: Vec<NumberCount>,
    pub latest_draw: Option<DrawRecord>,
}

/// Validates raw JSON draws without touching the store.
pub fn load(records: &Value) -> LfResult<Vec<DrawRecord>> {
    loader::parse_draws(records)
}

pub fn evaluate(main: &MainSet, previous: Option<&DrawRecord>, cfg: &FilterConfig) -> Evaluation {
    filters::evaluate(main, previous.map(DrawRecord::main), cfg)
}

/// Every draw annotated against its chronological predecessor, newest first.
pub fn evaluate_history(dataset: &Dataset, cfg: &FilterConfig) -> Vec<DrawRecord> {
    let draws = dataset.draws();
    let mut out: Vec<DrawRecord> = draws
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let previous = i.checked_sub(1).map(|p| &draws[p]);
            let evaluation = evaluate(d.main(), previous, cfg);
            d.clone().with_evaluation(evaluation)
        })
        .collect();
    out.reverse();
    out
}

pub fn predict(state: &LotoForgeState, request: &PredictionRequest) -> LfResult<PredictionBatch> {
    let dataset = state.dataset();
    predictor::predict(&dataset, request, &state.config())
}

pub fn insights(state: &LotoForgeState, window: Option<usize>, limit: Option<usize>) -> Insights {
    let dataset = state.dataset();
    HistoricalStatistics::analyze(dataset.draws(), window).insights(limit)
}

fn top_counts<'a>(sets: impl Iterator<Item = &'a [u8]>) -> Vec<NumberCount> {
    let mut counts = [0u32; POOL_MAX as usize + 1];
    for set in sets {
        for &n in set {
            counts[n as usize] += 1;
        }
    }
    let mut ranked: Vec<NumberCount> = (1..=POOL_MAX)
        .map(|n| NumberCount {
            number: n,
            count: counts[n as usize],
        })
        .filter(|c| c.count > 0)
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.number.cmp(&b.number)));
    ranked.truncate(SUMMARY_TOP);
    ranked
}

pub fn summary(state: &LotoForgeState) -> DatasetSummary {
    let dataset = state.dataset();
    let draws = dataset.draws();
    DatasetSummary {
        total_draws: draws.len(),
        most_common_main: top_counts(draws.iter().map(|d| &d.main()[..])),
        most_common_bonus: top_counts(draws.iter().map(|d| &d.bonus()[..])),
        latest_draw: dataset.latest().cloned(),
    }
}

/// Replaces the whole dataset with a validated JSON batch.
pub fn upload(state: &LotoForgeState, records: &Value) -> LfResult<usize> {
    let draws = load(records)?;
    let next = state.store.replace(draws)?;
    info!("Upload accepted: {} draws", next.len());
    Ok(next.len())
}

pub fn upload_csv<R: Read>(state: &LotoForgeState, reader: R, delimiter: u8) -> LfResult<usize> {
    let draws = loader::parse_csv(reader, delimiter)?;
    let next = state.store.replace(draws)?;
    info!("CSV upload accepted: {} draws", next.len());
    Ok(next.len())
}

/// Replaces the whole dataset with the draws of a CSV file.
pub fn import_csv_file<P: AsRef<Path>>(state: &LotoForgeState, path: P, delimiter: u8) -> LfResult<usize> {
    let draws = loader::load_csv_file(path, delimiter)?;
    let next = state.store.replace(draws)?;
    Ok(next.len())
}

/// Validates one raw draw and stores it as a new record.
pub fn add_draw(state: &LotoForgeState, record: &Value) -> LfResult<DrawRecord> {
    let raw = RawDraw::deserialize(record).map_err(|e| LotoError::Validation(e.to_string()))?;
    let draw = DrawRecord::try_from(raw)?;
    state.store.add_draw(draw.clone())?;
    Ok(draw)
}

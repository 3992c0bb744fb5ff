pub mod api;
pub mod config;
pub mod draw;
pub mod error;
pub mod filters;
pub mod generator;
pub mod loader;
pub mod predictor;
pub mod scoring;
pub mod stats;
pub mod store;

pub use crate::config::{Bounds, FilterConfig, FilterConfigPatch};
pub use crate::draw::DrawRecord;
pub use crate::error::{LfResult, LotoError};
pub use crate::filters::{Evaluation, FilterKind, FilterVerdict};
pub use crate::predictor::{PredictionBatch, PredictionRequest};
pub use crate::scoring::{ScoreBreakdown, ScoreComponent};
pub use crate::stats::{HistoricalStatistics, Insights};
pub use crate::store::{Dataset, DrawStore};

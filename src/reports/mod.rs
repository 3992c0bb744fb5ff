mod stats;
mod tables;

use serde::Serialize;
use tracing::error;

pub use self::stats::{insights as print_insights, patterns as print_patterns, summary as print_summary};
pub use self::tables::{
    candidates as print_candidates, evaluation as print_evaluation, history as print_history,
    reference_draws as print_reference_draws,
};

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => error!("❌ Failed to serialize output: {}", e),
    }
}

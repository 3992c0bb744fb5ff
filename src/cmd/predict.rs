use crate::reports;
use chrono::NaiveDate;
use clap::Args;
use lotoforge::api::{self, LotoForgeState};
use lotoforge::config::FilterConfig;
use lotoforge::error::LfResult;
use lotoforge::predictor::PredictionRequest;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub config: FilterConfig,

    /// Number of candidates (1-100).
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Defaults to the latest draw number + 1.
    #[arg(long)]
    pub next_draw: Option<u32>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Date candidates one week after this (YYYY-MM-DD) instead of the latest draw.
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,

    /// Statistics lookback in draws (0 = whole history).
    #[arg(short = 'w', long, default_value_t = 100)]
    pub window: usize,

    /// Skip scoring; candidates stay in generation order.
    #[arg(long, default_value_t = false)]
    pub no_scoring: bool,

    #[arg(long, default_value_t = false)]
    pub patterns: bool,
}

pub fn run(args: PredictArgs, state: &LotoForgeState, json: bool) -> LfResult<()> {
    let request = PredictionRequest {
        count: args.count,
        next_draw_number: args.next_draw,
        filter_config: None,
        include_scoring: !args.no_scoring,
        include_patterns: args.patterns,
        window: Some(args.window),
        seed: args.seed,
        reference_date: args.reference_date,
    };

    info!("🎲 Generating {} candidates...", request.count);
    let batch = api::predict(state, &request)?;

    if json {
        reports::print_json(&batch);
        return Ok(());
    }

    reports::print_reference_draws(&batch.reference_draws);
    reports::print_candidates(&batch);
    if let Some(patterns) = &batch.patterns {
        reports::print_patterns(patterns);
    }
    if let Some(insights) = &batch.insights {
        reports::print_insights(insights);
    }
    println!(
        "\n{} of {} candidates for draw {} pass every filter.",
        batch.passing,
        batch.candidates.len(),
        batch.next_draw_number
    );
    Ok(())
}

use crate::reports;
use clap::Args;
use lotoforge::api::{self, LotoForgeState};
use lotoforge::error::LfResult;

#[derive(Args, Debug, Clone)]
pub struct InsightsArgs {
    /// Lookback in draws (0 = whole history).
    #[arg(short = 'w', long, default_value_t = 100)]
    pub window: usize,

    /// Entries per ranked list.
    #[arg(short = 'l', long, default_value_t = 10)]
    pub limit: usize,
}

pub fn run(args: InsightsArgs, state: &LotoForgeState, json: bool) -> LfResult<()> {
    let insights = api::insights(state, Some(args.window), Some(args.limit));

    if json {
        reports::print_json(&insights);
        return Ok(());
    }

    if insights.empty_dataset {
        println!("\n⚠️  No draws in the dataset: every number is cold and never seen.");
    } else {
        println!("\n📊 Statistics over the last {} draws", insights.draws_analyzed);
    }
    reports::print_insights(&insights);
    reports::print_patterns(&insights.patterns);
    Ok(())
}

use crate::reports;
use clap::Args;
use lotoforge::api::{self, LotoForgeState};
use lotoforge::config::FilterConfig;
use lotoforge::draw::main_set;
use lotoforge::error::LfResult;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub config: FilterConfig,

    /// Only the N most recent draws.
    #[arg(long)]
    pub last: Option<usize>,

    /// Evaluate these 7 numbers against the latest draw instead of the history.
    #[arg(long, value_delimiter = ',')]
    pub main: Option<Vec<u8>>,
}

pub fn run(args: EvaluateArgs, state: &LotoForgeState, json: bool) -> LfResult<()> {
    let dataset = state.dataset();
    let config = state.config();

    if let Some(numbers) = &args.main {
        let main = main_set(numbers)?;
        let evaluation = api::evaluate(&main, dataset.latest(), &config);
        if json {
            reports::print_json(&evaluation);
        } else {
            reports::print_evaluation(&main, &evaluation);
        }
        return Ok(());
    }

    let mut history = api::evaluate_history(&dataset, &config);
    if let Some(n) = args.last {
        history.truncate(n);
    }

    if json {
        reports::print_json(&history);
    } else {
        reports::print_history(&history);
    }
    Ok(())
}

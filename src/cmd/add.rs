use crate::reports;
use clap::Args;
use lotoforge::api::{self, LotoForgeState};
use lotoforge::error::LfResult;
use serde_json::json;

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(long)]
    pub id: String,

    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// Seven comma-separated numbers, zero padding allowed.
    #[arg(long, value_delimiter = ',', required = true)]
    pub main: Vec<String>,

    #[arg(long, value_delimiter = ',', required = true)]
    pub bonus: Vec<String>,
}

pub fn run(args: AddArgs, state: &LotoForgeState, json: bool) -> LfResult<()> {
    let record = json!({
        "id": args.id,
        "date": args.date,
        "main": args.main,
        "bonus": args.bonus,
    });
    let draw = api::add_draw(state, &record)?;

    if json {
        reports::print_json(&json!({ "success": true, "draw": draw }));
    } else {
        println!("✅ Added {}", draw);
    }
    Ok(())
}

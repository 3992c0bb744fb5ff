use crate::reports;
use lotoforge::api::{self, LotoForgeState};
use lotoforge::error::LfResult;

pub fn run(state: &LotoForgeState, json: bool) -> LfResult<()> {
    let summary = api::summary(state);
    if json {
        reports::print_json(&summary);
    } else {
        reports::print_summary(&summary);
    }
    Ok(())
}

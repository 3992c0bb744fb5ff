use crate::reports;
use clap::Args;
use lotoforge::api::{self, LotoForgeState};
use lotoforge::error::{LfResult, LotoError};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// File whose draws replace the whole dataset.
    pub file: PathBuf,

    /// Read CSV (`id,date,m1..m7,b1,b2`) instead of JSON.
    #[arg(long, default_value_t = false)]
    pub csv: bool,

    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

pub fn run(args: ImportArgs, state: &LotoForgeState, json: bool) -> LfResult<()> {
    info!("📥 Importing {}", args.file.display());

    let imported = if args.csv {
        if !args.delimiter.is_ascii() {
            return Err(LotoError::Config(format!(
                "delimiter '{}' must be a single ASCII character",
                args.delimiter
            )));
        }
        api::import_csv_file(state, &args.file, args.delimiter as u8)?
    } else {
        let content = fs::read_to_string(&args.file)?;
        let value: Value = serde_json::from_str(&content)?;
        api::upload(state, &value)?
    };

    if json {
        reports::print_json(&json!({ "success": true, "imported": imported }));
    } else {
        println!("✅ Imported {} draws; dataset replaced.", imported);
    }
    Ok(())
}

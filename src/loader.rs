use crate::draw::{DrawRecord, NumberRepr, RawDraw, BONUS_COUNT, MAIN_COUNT};
use crate::error::{LfResult, LotoError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Serialize)]
struct Snapshot<'a> {
    draws: Vec<&'a DrawRecord>,
}

/// Validates a batch of raw draw objects. Either `{"draws": [...]}` or a bare
/// array. One bad record rejects the whole batch.
pub fn parse_draws(value: &Value) -> LfResult<Vec<DrawRecord>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("draws") {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(LotoError::Validation("'draws' must be an array".into())),
            None => return Err(LotoError::Validation("missing field 'draws'".into())),
        },
        _ => {
            return Err(LotoError::Validation(
                "expected an array of draws or an object with a 'draws' array".into(),
            ))
        }
    };

    let mut draws = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let raw = RawDraw::deserialize(item)
            .map_err(|e| LotoError::Validation(format!("record {}: {}", idx + 1, e)))?;
        let draw = DrawRecord::try_from(raw).map_err(|e| match e {
            LotoError::Validation(msg) => LotoError::Validation(format!("record {}: {}", idx + 1, msg)),
            other => other,
        })?;
        draws.push(draw);
    }
    reject_duplicate_ids(&draws)?;
    debug!("Parsed {} draw records", draws.len());
    Ok(draws)
}

pub fn parse_draws_str(content: &str) -> LfResult<Vec<DrawRecord>> {
    let value: Value = serde_json::from_str(content)?;
    parse_draws(&value)
}

pub fn load_json_file<P: AsRef<Path>>(path: P) -> LfResult<Vec<DrawRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let draws = parse_draws_str(&content)?;
    info!("Loaded {} draws from {}", draws.len(), path.display());
    Ok(draws)
}

/// CSV with header `id,date,m1..m7,b1,b2`. Numbers may be zero-padded.
pub fn parse_csv<R: Read>(reader: R, delimiter: u8) -> LfResult<Vec<DrawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let expected = 2 + MAIN_COUNT + BONUS_COUNT;
    let mut draws = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let line = idx + 2;
        if record.len() != expected {
            return Err(LotoError::Validation(format!(
                "line {}: expected {} columns, got {}",
                line,
                expected,
                record.len()
            )));
        }
        let numbers = |range: std::ops::Range<usize>| -> Vec<NumberRepr> {
            range.map(|i| NumberRepr::Text(record[i].to_string())).collect()
        };
        let raw = RawDraw {
            id: Some(record[0].to_string()),
            date: Some(record[1].to_string()),
            main: Some(numbers(2..2 + MAIN_COUNT)),
            bonus: Some(numbers(2 + MAIN_COUNT..expected)),
        };
        let draw = DrawRecord::try_from(raw).map_err(|e| match e {
            LotoError::Validation(msg) => LotoError::Validation(format!("line {}: {}", line, msg)),
            other => other,
        })?;
        draws.push(draw);
    }
    reject_duplicate_ids(&draws)?;
    Ok(draws)
}

pub fn load_csv_file<P: AsRef<Path>>(path: P, delimiter: u8) -> LfResult<Vec<DrawRecord>> {
    let path = path.as_ref();
    let draws = parse_csv(File::open(path)?, delimiter)?;
    info!("Imported {} draws from {}", draws.len(), path.display());
    Ok(draws)
}

/// Snapshot JSON, newest draw first. Input must be oldest first.
pub fn to_snapshot_json(chronological: &[DrawRecord]) -> LfResult<String> {
    let snapshot = Snapshot {
        draws: chronological.iter().rev().collect(),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

fn reject_duplicate_ids(draws: &[DrawRecord]) -> LfResult<()> {
    let mut seen = HashSet::new();
    for d in draws {
        if !seen.insert(d.id()) {
            return Err(LotoError::DuplicateDraw(d.id().to_string()));
        }
    }
    Ok(())
}

use crate::error::{LfResult, LotoError};
use crate::filters::Evaluation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const POOL_MAX: u8 = 37;
pub const MAIN_COUNT: usize = 7;
pub const BONUS_COUNT: usize = 2;

pub type MainSet = [u8; MAIN_COUNT];
pub type BonusSet = [u8; BONUS_COUNT];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// A number as it may appear in input files: `7` or `"07"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberRepr {
    Int(i64),
    Text(String),
}

impl NumberRepr {
    fn normalize(&self) -> LfResult<i64> {
        match self {
            NumberRepr::Int(n) => Ok(*n),
            NumberRepr::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| LotoError::Validation(format!("'{}' is not a number", s))),
        }
    }
}

/// Untrusted draw shape, straight from JSON. Every field is optional so that
/// a missing one becomes a validation error instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDraw {
    pub id: Option<String>,
    pub date: Option<String>,
    pub main: Option<Vec<NumberRepr>>,
    pub bonus: Option<Vec<NumberRepr>>,
}

/// One historical or generated draw. Numbers are validated on construction and
/// never change afterwards; only the `evaluation` annotation can be attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDraw")]
pub struct DrawRecord {
    id: String,
    date: NaiveDate,
    main: MainSet,
    bonus: BonusSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation: Option<Evaluation>,
}

impl DrawRecord {
    pub fn new(id: impl Into<String>, date: NaiveDate, main: MainSet, bonus: BonusSet) -> LfResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(LotoError::Validation("Draw id must not be empty".into()));
        }
        validate_numbers(&main, &bonus)
            .map_err(|e| LotoError::Validation(format!("{}: {}", id, detail(e))))?;
        Ok(Self {
            id,
            date,
            main,
            bonus,
            evaluation: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn main(&self) -> &MainSet {
        &self.main
    }

    pub fn bonus(&self) -> &BonusSet {
        &self.bonus
    }

    pub fn sorted_main(&self) -> MainSet {
        let mut main = self.main;
        main.sort_unstable();
        main
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = Some(evaluation);
        self
    }

    /// First run of digits in the id, e.g. `650` for "draw #650".
    pub fn draw_number(&self) -> Option<u32> {
        extract_draw_number(&self.id)
    }
}

impl TryFrom<RawDraw> for DrawRecord {
    type Error = LotoError;

    fn try_from(raw: RawDraw) -> LfResult<Self> {
        let id = raw
            .id
            .ok_or_else(|| LotoError::Validation("missing field 'id'".into()))?;
        let label = id.clone();
        let with_id = |msg: String| LotoError::Validation(format!("{}: {}", label, msg));

        let date_raw = raw.date.ok_or_else(|| with_id("missing field 'date'".into()))?;
        let date = parse_date(&date_raw).map_err(|_| with_id(format!("invalid date '{}'", date_raw)))?;

        let main_raw = raw.main.ok_or_else(|| with_id("missing field 'main'".into()))?;
        let bonus_raw = raw.bonus.ok_or_else(|| with_id("missing field 'bonus'".into()))?;

        let main: MainSet = to_fixed(&main_raw, "main").map_err(|e| with_id(detail(e)))?;
        let bonus: BonusSet = to_fixed(&bonus_raw, "bonus").map_err(|e| with_id(detail(e)))?;

        DrawRecord::new(id, date, main, bonus)
    }
}

impl fmt::Display for DrawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} + {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            join_numbers(&self.main),
            join_numbers(&self.bonus)
        )
    }
}

pub fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn parse_date(raw: &str) -> LfResult<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| LotoError::Validation(format!("invalid date '{}'", raw)))
}

pub fn extract_draw_number(id: &str) -> Option<u32> {
    let digits: String = id
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Oldest first. Ties on date fall back to the draw number, then input order.
pub fn sort_chronologically(draws: &mut [DrawRecord]) {
    draws.sort_by_key(|d| (d.date, d.draw_number()));
}

fn detail(err: LotoError) -> String {
    match err {
        LotoError::Validation(msg) => msg,
        other => other.to_string(),
    }
}

fn to_fixed<const N: usize>(values: &[NumberRepr], field: &str) -> LfResult<[u8; N]> {
    if values.len() != N {
        return Err(LotoError::Validation(format!(
            "'{}' requires {} numbers, got {}",
            field,
            N,
            values.len()
        )));
    }
    let mut out = [0u8; N];
    for (slot, value) in out.iter_mut().zip(values) {
        let n = value.normalize()?;
        if n < 1 || n > POOL_MAX as i64 {
            return Err(LotoError::Validation(format!(
                "'{}' number {} out of range (1-{})",
                field, n, POOL_MAX
            )));
        }
        *slot = n as u8;
    }
    Ok(out)
}

/// A standalone main set (no bonus), checked for count, range and repeats.
pub fn main_set(numbers: &[u8]) -> LfResult<MainSet> {
    if numbers.len() != MAIN_COUNT {
        return Err(LotoError::Validation(format!(
            "main requires {} numbers, got {}",
            MAIN_COUNT,
            numbers.len()
        )));
    }
    let mut seen = [false; POOL_MAX as usize + 1];
    let mut out = [0u8; MAIN_COUNT];
    for (slot, &n) in out.iter_mut().zip(numbers) {
        if n < 1 || n > POOL_MAX {
            return Err(LotoError::Validation(format!(
                "main number {} out of range (1-{})",
                n, POOL_MAX
            )));
        }
        if seen[n as usize] {
            return Err(LotoError::Validation(format!("duplicate number {}", n)));
        }
        seen[n as usize] = true;
        *slot = n;
    }
    Ok(out)
}

pub fn validate_numbers(main: &[u8], bonus: &[u8]) -> LfResult<()> {
    if main.len() != MAIN_COUNT {
        return Err(LotoError::Validation(format!(
            "main requires {} numbers, got {}",
            MAIN_COUNT,
            main.len()
        )));
    }
    if bonus.len() != BONUS_COUNT {
        return Err(LotoError::Validation(format!(
            "bonus requires {} numbers, got {}",
            BONUS_COUNT,
            bonus.len()
        )));
    }

    let mut seen = [false; POOL_MAX as usize + 1];
    for (field, numbers) in [("main", main), ("bonus", bonus)] {
        for &n in numbers {
            if n < 1 || n > POOL_MAX {
                return Err(LotoError::Validation(format!(
                    "{} number {} out of range (1-{})",
                    field, n, POOL_MAX
                )));
            }
            if seen[n as usize] {
                return Err(LotoError::Validation(format!("duplicate number {}", n)));
            }
            seen[n as usize] = true;
        }
    }
    Ok(())
}

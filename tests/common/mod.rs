#![allow(dead_code)] // not every test binary uses every helper

use lotoforge::draw::{parse_date, DrawRecord};

pub const EXAMPLE_MAIN: [u8; 7] = [1, 8, 10, 14, 25, 33, 35];
pub const EXAMPLE_BONUS: [u8; 2] = [12, 21];

pub fn draw(number: u32, date: &str, main: [u8; 7], bonus: [u8; 2]) -> DrawRecord {
    DrawRecord::new(format!("draw #{}", number), parse_date(date).unwrap(), main, bonus).unwrap()
}

/// Six weekly draws, oldest first.
///
/// Frequencies: 8 appears 3 times; 1, 10, 14, 33, 35, 36 twice; 6, 17, 22 never.
pub fn sample_history() -> Vec<DrawRecord> {
    vec![
        draw(1, "2024-01-05", EXAMPLE_MAIN, EXAMPLE_BONUS),
        draw(2, "2024-01-12", [2, 9, 15, 20, 26, 31, 36], [5, 17]),
        draw(3, "2024-01-19", [3, 8, 11, 19, 24, 30, 37], [6, 22]),
        draw(4, "2024-01-26", [1, 7, 13, 18, 27, 32, 34], [4, 20]),
        draw(5, "2024-02-02", [5, 8, 12, 16, 23, 29, 35], [2, 30]),
        draw(6, "2024-02-09", [4, 10, 14, 21, 28, 33, 36], [9, 17]),
    ]
}

/// The same six draws as a snapshot document (newest first, mixed encodings).
pub const SAMPLE_SNAPSHOT: &str = r#"{
  "draws": [
    {"id": "draw #6", "date": "2024-02-09", "main": ["04", "10", "14", "21", "28", "33", "36"], "bonus": ["09", "17"]},
    {"id": "draw #5", "date": "2024-02-02", "main": [5, 8, 12, 16, 23, 29, 35], "bonus": [2, 30]},
    {"id": "draw #4", "date": "2024-01-26", "main": [1, 7, 13, 18, 27, 32, 34], "bonus": [4, 20]},
    {"id": "draw #3", "date": "2024/01/19", "main": [3, 8, 11, 19, 24, 30, 37], "bonus": [6, 22]},
    {"id": "draw #2", "date": "2024-01-12", "main": [2, 9, 15, 20, 26, 31, 36], "bonus": [5, 17]},
    {"id": "draw #1", "date": "2024-01-05", "main": ["01", "08", 10, 14, 25, 33, 35], "bonus": [12, 21]}
  ]
}"#;

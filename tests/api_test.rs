use lotoforge::api::{self, LotoForgeState};
use lotoforge::config::FilterConfig;
use lotoforge::error::ErrorKind;
use lotoforge::filters::FilterKind;
use lotoforge::predictor::PredictionRequest;
use lotoforge::store::DrawStore;
use serde_json::{json, Value};
use std::io::Cursor;

mod common;
use common::{sample_history, EXAMPLE_MAIN, SAMPLE_SNAPSHOT};

fn state() -> LotoForgeState {
    LotoForgeState::new(DrawStore::in_memory(sample_history()), FilterConfig::default())
}

#[test]
fn test_evaluate_history_uses_predecessor() {
    let state = state();
    let history = api::evaluate_history(&state.dataset(), &state.config());
    assert_eq!(history.len(), 6);
    assert_eq!(history[0].id(), "draw #6");

    let oldest = history.last().unwrap();
    assert!(!oldest.evaluation().unwrap().get(FilterKind::Pull).unwrap().evaluated);

    // draw #6 shares nothing with draw #5
    let newest_pull = history[0].evaluation().unwrap().get(FilterKind::Pull).unwrap();
    assert!(newest_pull.evaluated);
    assert!(newest_pull.pass);
}

#[test]
fn test_evaluate_single_set() {
    let state = state();
    let dataset = state.dataset();
    let evaluation = api::evaluate(&EXAMPLE_MAIN, dataset.latest(), &state.config());
    assert_eq!(evaluation.len(), 7);
    // 10, 14, 33 carried over from draw #6
    match &evaluation.get(FilterKind::Pull).unwrap().detail {
        lotoforge::filters::VerdictDetail::Pull { shared, .. } => assert_eq!(shared, &vec![10, 14, 33]),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_summary() {
    let summary = api::summary(&state());
    assert_eq!(summary.total_draws, 6);
    assert_eq!(summary.most_common_main.len(), 10);
    assert_eq!(summary.most_common_main[0].number, 8);
    assert_eq!(summary.most_common_main[0].count, 3);
    assert_eq!(summary.most_common_bonus[0].number, 17);
    assert_eq!(summary.most_common_bonus[0].count, 2);
    assert_eq!(summary.latest_draw.unwrap().id(), "draw #6");
}

#[test]
fn test_predict_and_insights_through_state() {
    let state = state();
    let batch = api::predict(
        &state,
        &PredictionRequest {
            count: 3,
            seed: Some(5),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(batch.candidates.len(), 3);

    let insights = api::insights(&state, Some(0), Some(5));
    assert_eq!(insights.hot.len(), 5);
    assert_eq!(insights.draws_analyzed, 6);
}

#[test]
fn test_upload_replaces_dataset() {
    let state = state();
    let value: Value = serde_json::from_str(SAMPLE_SNAPSHOT).unwrap();
    let mut draws = value["draws"].as_array().unwrap().clone();
    draws.truncate(2);

    assert_eq!(api::upload(&state, &Value::Array(draws)).unwrap(), 2);
    assert_eq!(state.dataset().len(), 2);
}

#[test]
fn test_failed_upload_keeps_old_dataset() {
    let state = state();
    let bad = json!([{"id": "x", "date": "2024-01-05", "main": [1, 2, 3], "bonus": [8, 9]}]);
    let err = api::upload(&state, &bad).unwrap_err();
    assert_eq!(err.report().kind, ErrorKind::Validation);
    assert!(!err.report().success);
    assert_eq!(state.dataset().len(), 6);
}

#[test]
fn test_upload_csv() {
    let state = state();
    let csv = "id,date,m1,m2,m3,m4,m5,m6,m7,b1,b2\nA,2024-03-01,1,2,3,4,5,6,7,8,9\n";
    assert_eq!(api::upload_csv(&state, Cursor::new(csv), b',').unwrap(), 1);
    assert_eq!(state.dataset().latest().unwrap().id(), "A");
}

#[test]
fn test_add_draw() {
    let state = state();
    let rec = json!({"id": "draw #7", "date": "2024-02-16", "main": ["03", "09", 12, 17, 22, 30, 34], "bonus": [1, 2]});
    let added = api::add_draw(&state, &rec).unwrap();
    assert_eq!(added.main(), &[3, 9, 12, 17, 22, 30, 34]);
    assert_eq!(state.dataset().latest().unwrap().id(), "draw #7");

    let err = api::add_draw(&state, &rec).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Duplicate);
}

#[test]
fn test_set_config_validates() {
    let state = state();
    let bad = FilterConfig {
        sum_min: 300,
        ..Default::default()
    };
    assert!(state.set_config(bad).is_err());
    assert_eq!(state.config(), FilterConfig::default());
}

#[test]
fn test_import_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.csv");
    std::fs::write(
        &path,
        "id;date;m1;m2;m3;m4;m5;m6;m7;b1;b2\nA;2024-03-01;1;2;3;4;5;6;7;8;9\nB;2024-03-08;10;11;12;13;14;15;16;17;18\n",
    )
    .unwrap();

    let state = state();
    assert_eq!(api::import_csv_file(&state, &path, b';').unwrap(), 2);
    assert_eq!(state.dataset().latest().unwrap().id(), "B");

    let missing = api::import_csv_file(&state, dir.path().join("absent.csv"), b',').unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::Io);
    assert_eq!(state.dataset().len(), 2);
}

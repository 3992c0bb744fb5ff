use lotoforge::stats::{HistoricalStatistics, LastSeen, PatternKind, PatternValue};

mod common;
use common::sample_history;

#[test]
fn test_empty_dataset_degrades_gracefully() {
    let stats = HistoricalStatistics::analyze(&[], Some(50));
    assert!(stats.is_empty());

    let insights = stats.insights(None);
    assert!(insights.empty_dataset);
    assert_eq!(insights.draws_analyzed, 0);
    assert!(insights.patterns.is_empty());

    assert_eq!(insights.cold.len(), 37);
    assert!(insights.cold.iter().all(|e| e.frequency == 0 && e.score == 100.0));
    assert_eq!(insights.cold[0].number, 1);

    assert_eq!(insights.overdue.len(), 37);
    assert!(insights.overdue.iter().all(|e| e.last_seen == LastSeen::Never && e.score == 100.0));

    assert!(insights.hot.iter().all(|e| e.score == 0.0));
}

#[test]
fn test_frequencies_and_hot_ranking() {
    let stats = HistoricalStatistics::analyze(&sample_history(), None);
    assert_eq!(stats.draws_analyzed(), 6);
    assert_eq!(stats.number(8).unwrap().frequency, 3);
    assert_eq!(stats.number(6).unwrap().frequency, 0);

    let hot = stats.hot();
    assert_eq!(hot[0].number, 8);
    assert_eq!(hot[0].score, 100.0);
    let next: Vec<u8> = hot[1..7].iter().map(|e| e.number).collect();
    assert_eq!(next, vec![1, 10, 14, 33, 35, 36]);
    assert_eq!(hot[1].score, 66.67);
}

#[test]
fn test_cold_ranking() {
    let stats = HistoricalStatistics::analyze(&sample_history(), None);
    let cold: Vec<(u8, u32)> = stats.cold().iter().take(5).map(|e| (e.number, e.frequency)).collect();
    assert_eq!(cold, vec![(6, 0), (17, 0), (22, 0), (2, 1), (3, 1)]);
    assert_eq!(stats.cold()[0].score, 100.0);
}

#[test]
fn test_overdue_ranking() {
    let stats = HistoricalStatistics::analyze(&sample_history(), None);
    let overdue = stats.overdue();
    let never: Vec<u8> = overdue[..3].iter().map(|e| e.number).collect();
    assert_eq!(never, vec![6, 17, 22]);

    // 25 was last drawn five draws ago: 5 / (37/7) * 50
    assert_eq!(overdue[3].number, 25);
    assert_eq!(overdue[3].last_seen, LastSeen::Draws(5));
    assert_eq!(overdue[3].score, 47.3);

    assert_eq!(stats.number(4).unwrap().last_seen, LastSeen::Draws(0));
    assert_eq!(stats.number(8).unwrap().last_seen, LastSeen::Draws(1));
}

#[test]
fn test_window_keeps_most_recent_draws() {
    let stats = HistoricalStatistics::analyze(&sample_history(), Some(1));
    assert_eq!(stats.draws_analyzed(), 1);
    let hot: Vec<u8> = stats.hot().iter().take(7).map(|e| e.number).collect();
    assert_eq!(hot, vec![4, 10, 14, 21, 28, 33, 36]);
    assert_eq!(stats.number(8).unwrap().frequency, 0);
}

#[test]
fn test_input_order_does_not_matter() {
    let ordered = HistoricalStatistics::analyze(&sample_history(), Some(4));
    let mut reversed = sample_history();
    reversed.reverse();
    let shuffled = HistoricalStatistics::analyze(&reversed, Some(4));
    assert_eq!(ordered.all_numbers(), shuffled.all_numbers());
    assert_eq!(ordered.insights(Some(10)), shuffled.insights(Some(10)));
}

#[test]
fn test_patterns_over_sample() {
    let patterns = HistoricalStatistics::analyze(&sample_history(), None).patterns();
    assert_eq!(patterns.len(), 3);

    assert_eq!(patterns[0].kind, PatternKind::Consecutive);
    assert_eq!(patterns[0].value, PatternValue::Scalar(0.0));

    assert_eq!(patterns[1].kind, PatternKind::ZoneDistribution);
    match &patterns[1].value {
        PatternValue::Shares(shares) => {
            assert_eq!(shares["low"], 35.7);
            assert_eq!(shares["mid"], 26.2);
            assert_eq!(shares["high"], 38.1);
        }
        other => panic!("unexpected value {:?}", other),
    }

    assert_eq!(patterns[2].kind, PatternKind::OddEvenRatio);
    assert_eq!(patterns[2].value, PatternValue::Scalar(3.5));
}

#[test]
fn test_insights_json_shape() {
    let insights = HistoricalStatistics::analyze(&[], None).insights(Some(2));
    let json = serde_json::to_value(&insights).unwrap();
    assert_eq!(json["overdue"][0]["last_seen"], "Never");
    assert_eq!(json["cold"][1]["number"], 2);
    assert_eq!(json["cold"].as_array().unwrap().len(), 2);
    assert_eq!(json["empty_dataset"], true);
}

#[test]
fn test_number_lookup_outside_pool() {
    let stats = HistoricalStatistics::analyze(&sample_history(), None);
    assert!(stats.number(0).is_none());
    assert!(stats.number(38).is_none());
    assert_eq!(stats.hot_score(0), 0.0);
    assert_eq!(stats.hot_score(255), 0.0);
    assert_eq!(stats.hot_score(8), 100.0);
}

use lotoforge::config::FilterConfig;
use lotoforge::filters::{evaluate, evaluate_filter, FilterKind, VerdictDetail};
use rstest::rstest;

mod common;
use common::EXAMPLE_MAIN;

fn verdict_pass(kind: FilterKind, main: [u8; 7]) -> bool {
    evaluate_filter(kind, &main, None, &FilterConfig::default()).pass
}

#[test]
fn test_example_draw_continuous_and_sum() {
    let cfg = FilterConfig::default();

    let continuous = evaluate_filter(FilterKind::Continuous, &EXAMPLE_MAIN, None, &cfg);
    assert!(continuous.pass);
    match continuous.detail {
        VerdictDetail::Continuous { count, ref pairs, max } => {
            assert_eq!(count, 0);
            assert!(pairs.is_empty());
            assert_eq!(max, 2);
        }
        other => panic!("unexpected detail {:?}", other),
    }

    let sum = evaluate_filter(FilterKind::Sum, &EXAMPLE_MAIN, None, &cfg);
    assert!(sum.pass);
    assert_eq!(
        sum.detail,
        VerdictDetail::Sum {
            total: 126,
            min: 100,
            max: 170
        }
    );
}

#[test]
fn test_example_draw_passes_everything_without_previous() {
    let evaluation = evaluate(&EXAMPLE_MAIN, None, &FilterConfig::default());
    assert_eq!(evaluation.len(), 7);
    assert!(evaluation.overall_pass());
    assert_eq!(evaluation.passed_count(), 7);
    let pull = evaluation.get(FilterKind::Pull).unwrap();
    assert!(pull.pass);
    assert!(!pull.evaluated);
}

#[rstest]
#[case([1, 2, 3, 10, 20, 30, 37], 2, true)]
#[case([1, 2, 3, 4, 20, 30, 37], 3, false)]
#[case([5, 10, 15, 20, 25, 30, 35], 0, true)]
#[case([1, 2, 3, 4, 5, 6, 7], 6, false)]
fn test_continuous(#[case] main: [u8; 7], #[case] expected: u8, #[case] pass: bool) {
    let v = evaluate_filter(FilterKind::Continuous, &main, None, &FilterConfig::default());
    match v.detail {
        VerdictDetail::Continuous { count, .. } => assert_eq!(count, expected),
        other => panic!("unexpected detail {:?}", other),
    }
    assert_eq!(v.pass, pass);
}

#[rstest]
#[case([1, 5, 9, 13, 17, 21, 34], true)] // 100, lower edge
#[case([10, 20, 21, 25, 30, 31, 33], true)] // 170, upper edge
#[case([1, 5, 9, 13, 17, 21, 33], false)] // 99
#[case([10, 20, 21, 25, 30, 31, 34], false)] // 171
fn test_sum_edges(#[case] main: [u8; 7], #[case] pass: bool) {
    assert_eq!(verdict_pass(FilterKind::Sum, main), pass);
}

#[rstest]
#[case([1, 3, 5, 7, 9, 11, 13], false)]
#[case([2, 4, 6, 8, 10, 12, 14], false)]
#[case([1, 3, 4, 6, 8, 10, 12], true)]
#[case([1, 3, 5, 7, 9, 10, 12], true)]
#[case([1, 3, 5, 7, 9, 11, 12], false)]
fn test_odd_even(#[case] main: [u8; 7], #[case] pass: bool) {
    assert_eq!(verdict_pass(FilterKind::OddEven, main), pass);
}

#[rstest]
#[case([1, 11, 21, 2, 3, 4, 5], false)]
#[case([1, 11, 2, 12, 3, 13, 4], true)]
#[case(EXAMPLE_MAIN, true)]
fn test_last_digits(#[case] main: [u8; 7], #[case] pass: bool) {
    assert_eq!(verdict_pass(FilterKind::LastDigits, main), pass);
}

#[rstest]
#[case([1, 2, 3, 4, 5, 6, 13], false)]
#[case([1, 2, 3, 4, 5, 13, 25], true)]
#[case([1, 2, 3, 13, 14, 15, 16], false)]
#[case(EXAMPLE_MAIN, true)]
fn test_zone3(#[case] main: [u8; 7], #[case] pass: bool) {
    assert_eq!(verdict_pass(FilterKind::Zone3, main), pass);
}

#[rstest]
#[case([1, 2, 10, 11, 19, 20, 28], true)]
#[case([1, 2, 3, 10, 11, 12, 13], false)] // only 2 zones populated
#[case([1, 2, 3, 4, 5, 10, 19], false)] // zone A holds 5
#[case([1, 2, 3, 10, 11, 12, 19], true)] // exactly 3 zones
fn test_zone4(#[case] main: [u8; 7], #[case] pass: bool) {
    assert_eq!(verdict_pass(FilterKind::Zone4, main), pass);
}

#[rstest]
#[case([1, 2, 3, 4, 8, 10, 14], 4, false)]
#[case([1, 2, 3, 4, 5, 6, 8], 2, true)]
#[case([2, 3, 4, 5, 6, 7, 9], 0, true)]
fn test_pull(#[case] main: [u8; 7], #[case] shared: u8, #[case] pass: bool) {
    let v = evaluate_filter(FilterKind::Pull, &main, Some(&EXAMPLE_MAIN), &FilterConfig::default());
    assert!(v.evaluated);
    assert_eq!(v.pass, pass);
    match v.detail {
        VerdictDetail::Pull { count, .. } => assert_eq!(count, shared),
        other => panic!("unexpected detail {:?}", other),
    }
}

#[test]
fn test_unsorted_input_gives_same_verdicts() {
    let cfg = FilterConfig::default();
    let shuffled = [35, 14, 1, 33, 8, 25, 10];
    assert_eq!(
        evaluate(&shuffled, Some(&EXAMPLE_MAIN), &cfg),
        evaluate(&EXAMPLE_MAIN, Some(&EXAMPLE_MAIN), &cfg)
    );
}

#[test]
fn test_thresholds_are_configurable() {
    let cfg = FilterConfig {
        continuous_max: 0,
        sum_min: 130,
        ..FilterConfig::default()
    };
    let evaluation = evaluate(&[1, 2, 10, 14, 25, 33, 35], None, &cfg);
    assert!(!evaluation.get(FilterKind::Continuous).unwrap().pass);
    assert!(!evaluation.get(FilterKind::Sum).unwrap().pass);
    assert!(!evaluation.overall_pass());
    assert_eq!(evaluation.passed_count(), 5);
}

#[test]
fn test_diagnostic_text_mentions_numbers() {
    let v = evaluate_filter(FilterKind::Sum, &EXAMPLE_MAIN, None, &FilterConfig::default());
    let text = v.to_string();
    assert!(text.contains("126"), "{}", text);
    assert!(text.contains("100-170"), "{}", text);
}

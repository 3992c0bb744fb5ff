use super::{FilterVerdict, VerdictDetail};
use crate::config::FilterConfig;
use crate::draw::MainSet;
use std::collections::BTreeMap;

/// Count of numbers per last decimal digit. Only digits that occur appear.
pub fn distribution(numbers: &[u8]) -> BTreeMap<u8, u8> {
    let mut counts = BTreeMap::new();
    for &n in numbers {
        *counts.entry(n % 10).or_insert(0) += 1;
    }
    counts
}

pub fn check(sorted: &MainSet, cfg: &FilterConfig) -> FilterVerdict {
    let distribution = distribution(sorted);
    let max_count = distribution.values().copied().max().unwrap_or(0);
    FilterVerdict::new(
        max_count <= cfg.last_digit_max,
        VerdictDetail::LastDigits {
            distribution,
            max_count,
            limit: cfg.last_digit_max,
        },
    )
}

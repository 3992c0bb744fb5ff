use super::{FilterVerdict, VerdictDetail};
use crate::config::FilterConfig;
use crate::draw::MainSet;

/// Adjacent pairs `(n, n + 1)` in an ascending main set.
pub fn consecutive_pairs(sorted: &MainSet) -> Vec<(u8, u8)> {
    sorted
        .windows(2)
        .filter(|w| w[0] + 1 == w[1])
        .map(|w| (w[0], w[1]))
        .collect()
}

pub fn check(sorted: &MainSet, cfg: &FilterConfig) -> FilterVerdict {
    let pairs = consecutive_pairs(sorted);
    let count = pairs.len() as u8;
    FilterVerdict::new(
        count <= cfg.continuous_max,
        VerdictDetail::Continuous {
            count,
            pairs,
            max: cfg.continuous_max,
        },
    )
}

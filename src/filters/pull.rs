use super::{FilterVerdict, VerdictDetail};
use crate::config::FilterConfig;
use crate::draw::MainSet;

/// Numbers carried over from the previous draw's main set, ascending.
pub fn shared_numbers(sorted: &MainSet, previous: &MainSet) -> Vec<u8> {
    sorted
        .iter()
        .copied()
        .filter(|n| previous.contains(n))
        .collect()
}

pub fn check(sorted: &MainSet, previous: Option<&MainSet>, cfg: &FilterConfig) -> FilterVerdict {
    let Some(previous) = previous else {
        return FilterVerdict::skipped(VerdictDetail::Pull {
            count: 0,
            shared: Vec::new(),
            bounds: cfg.pull_bounds,
        });
    };

    let shared = shared_numbers(sorted, previous);
    let count = shared.len() as u8;
    FilterVerdict::new(
        cfg.pull_bounds.contains(count),
        VerdictDetail::Pull {
            count,
            shared,
            bounds: cfg.pull_bounds,
        },
    )
}

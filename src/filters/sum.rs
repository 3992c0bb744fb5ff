use super::{FilterVerdict, VerdictDetail};
use crate::config::FilterConfig;
use crate::draw::MainSet;

pub fn check(sorted: &MainSet, cfg: &FilterConfig) -> FilterVerdict {
    let total: u32 = sorted.iter().map(|&n| n as u32).sum();
    FilterVerdict::new(
        cfg.sum_min <= total && total <= cfg.sum_max,
        VerdictDetail::Sum {
            total,
            min: cfg.sum_min,
            max: cfg.sum_max,
        },
    )
}

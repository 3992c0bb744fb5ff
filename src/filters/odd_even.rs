use super::{FilterVerdict, VerdictDetail};
use crate::config::FilterConfig;
use crate::draw::{MainSet, MAIN_COUNT};

pub fn odd_count(numbers: &[u8]) -> u8 {
    numbers.iter().filter(|&&n| n % 2 == 1).count() as u8
}

pub fn check(sorted: &MainSet, cfg: &FilterConfig) -> FilterVerdict {
    let odd = odd_count(sorted);
    FilterVerdict::new(
        cfg.odd_even_band.contains(odd),
        VerdictDetail::OddEven {
            odd,
            even: MAIN_COUNT as u8 - odd,
            band: cfg.odd_even_band,
        },
    )
}

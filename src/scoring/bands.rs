//! Distance-to-ideal curves shared by the filter sub-scores.
//!
//! Every curve returns 0 outside its band, 100 at the ideal point, and falls
//! linearly to 50 at the band edge farthest from the ideal.

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `ideal` is clamped into `[low, high]` first.
pub fn centered_score(value: f64, low: f64, high: f64, ideal: f64) -> f64 {
    if value < low || value > high {
        return 0.0;
    }
    let ideal = ideal.clamp(low, high);
    let reach = (ideal - low).max(high - ideal);
    if reach <= 0.0 {
        return 100.0;
    }
    100.0 - 50.0 * (value - ideal).abs() / reach
}

/// Centered on the midpoint of the band.
pub fn band_score(value: f64, low: f64, high: f64) -> f64 {
    centered_score(value, low, high, (low + high) / 2.0)
}

/// Zero is ideal, `limit` scores 50, anything above it 0.
pub fn ceiling_score(value: f64, limit: f64) -> f64 {
    if value > limit {
        0.0
    } else if limit <= 0.0 {
        100.0
    } else {
        100.0 - 50.0 * value / limit
    }
}

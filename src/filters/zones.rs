use super::{FilterVerdict, VerdictDetail};
use crate::config::{Bounds, FilterConfig};
use crate::draw::MainSet;
use serde::Serialize;
use std::fmt;

/// `(label, low, high)`, both ends inclusive.
pub type Zone = (&'static str, u8, u8);

pub const ZONE3: [Zone; 3] = [("low", 1, 12), ("mid", 13, 24), ("high", 25, 37)];
pub const ZONE4: [Zone; 4] = [("A", 1, 9), ("B", 10, 18), ("C", 19, 27), ("D", 28, 37)];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneCount {
    pub label: &'static str,
    pub low: u8,
    pub high: u8,
    pub count: u8,
}

impl ZoneCount {
    pub fn size(&self) -> u8 {
        self.high - self.low + 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneDetail {
    pub zones: Vec<ZoneCount>,
    pub bounds: Bounds,
    pub populated: u8,
    /// Spread requirement, if this partition has one.
    pub min_populated: Option<u8>,
}

impl fmt::Display for ZoneDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .zones
            .iter()
            .map(|z| format!("{}:{}", z.label, z.count))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{} [each {}]", parts, self.bounds)?;
        if let Some(min) = self.min_populated {
            write!(f, " [{} of {} zones, need {}]", self.populated, self.zones.len(), min)?;
        }
        Ok(())
    }
}

pub fn distribution(numbers: &[u8], zones: &[Zone]) -> Vec<ZoneCount> {
    zones
        .iter()
        .map(|&(label, low, high)| ZoneCount {
            label,
            low,
            high,
            count: numbers.iter().filter(|&&n| low <= n && n <= high).count() as u8,
        })
        .collect()
}

fn detail(sorted: &MainSet, zones: &[Zone], bounds: Bounds, min_populated: Option<u8>) -> ZoneDetail {
    let zones = distribution(sorted, zones);
    let populated = zones.iter().filter(|z| z.count > 0).count() as u8;
    ZoneDetail {
        zones,
        bounds,
        populated,
        min_populated,
    }
}

fn within_bounds(d: &ZoneDetail) -> bool {
    d.zones.iter().all(|z| d.bounds.contains(z.count))
}

pub fn check_zone3(sorted: &MainSet, cfg: &FilterConfig) -> FilterVerdict {
    let d = detail(sorted, &ZONE3, cfg.zone3_bounds, None);
    FilterVerdict::new(within_bounds(&d), VerdictDetail::Zone3(d))
}

pub fn check_zone4(sorted: &MainSet, cfg: &FilterConfig) -> FilterVerdict {
    let d = detail(sorted, &ZONE4, cfg.zone4_bounds, Some(cfg.zone4_min_zones));
    let pass = within_bounds(&d) && d.populated >= cfg.zone4_min_zones;
    FilterVerdict::new(pass, VerdictDetail::Zone4(d))
}

use crate::draw::MAIN_COUNT;
use crate::error::{LfResult, LotoError};
use crate::scoring::ScoreComponent;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Upper limit for any single weight.
pub const MAX_WEIGHT: f64 = 1e6;

/// Inclusive `[min, max]` band. Written as `"min,max"` on the command line and
/// as `[min, max]` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u8, u8)", into = "(u8, u8)")]
pub struct Bounds {
    pub min: u8,
    pub max: u8,
}

impl Bounds {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    #[inline(always)]
    pub fn contains(&self, value: u8) -> bool {
        self.min <= value && value <= self.max
    }
}

impl From<(u8, u8)> for Bounds {
    fn from((min, max): (u8, u8)) -> Self {
        Self { min, max }
    }
}

impl From<Bounds> for (u8, u8) {
    fn from(b: Bounds) -> Self {
        (b.min, b.max)
    }
}

impl FromStr for Bounds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(|c: char| c == ',' || c == '-').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(format!("'{}' must be written as min,max", s));
        }
        let min = parts[0]
            .parse()
            .map_err(|_| format!("Invalid number in '{}'", s))?;
        let max = parts[1]
            .parse()
            .map_err(|_| format!("Invalid number in '{}'", s))?;
        Ok(Self { min, max })
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Thresholds and weights for the seven filters and the frequency score.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    // === THRESHOLDS ===
    #[arg(long, default_value_t = 2)]
    pub continuous_max: u8,
    #[arg(long, default_value = "1,5")]
    pub zone3_bounds: Bounds,
    #[arg(long, default_value = "0,4")]
    pub zone4_bounds: Bounds,
    /// Zone4 spread: how many of the four zones must hold at least one number.
    #[arg(long, default_value_t = 3)]
    pub zone4_min_zones: u8,
    #[arg(long, default_value = "2,5")]
    pub odd_even_band: Bounds,
    #[arg(long, default_value_t = 100)]
    pub sum_min: u32,
    #[arg(long, default_value_t = 170)]
    pub sum_max: u32,
    #[arg(long, default_value_t = 2)]
    pub last_digit_max: u8,
    #[arg(long, default_value = "0,3")]
    pub pull_bounds: Bounds,

    // === WEIGHTS ===
    #[arg(long, default_value_t = 10.0)]
    pub continuous_weight: f64,
    #[arg(long, default_value_t = 15.0)]
    pub zone3_weight: f64,
    #[arg(long, default_value_t = 15.0)]
    pub zone4_weight: f64,
    #[arg(long, default_value_t = 10.0)]
    pub odd_even_weight: f64,
    #[arg(long, default_value_t = 15.0)]
    pub sum_weight: f64,
    #[arg(long, default_value_t = 10.0)]
    pub last_digit_weight: f64,
    #[arg(long, default_value_t = 10.0)]
    pub pull_weight: f64,
    #[arg(long, default_value_t = 15.0)]
    pub frequency_weight: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            continuous_max: 2,
            zone3_bounds: Bounds::new(1, 5),
            zone4_bounds: Bounds::new(0, 4),
            zone4_min_zones: 3,
            odd_even_band: Bounds::new(2, 5),
            sum_min: 100,
            sum_max: 170,
            last_digit_max: 2,
            pull_bounds: Bounds::new(0, 3),

            continuous_weight: 10.0,
            zone3_weight: 15.0,
            zone4_weight: 15.0,
            odd_even_weight: 10.0,
            sum_weight: 15.0,
            last_digit_weight: 10.0,
            pull_weight: 10.0,
            frequency_weight: 15.0,
        }
    }
}

/// A partial user-supplied config. Absent keys keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfigPatch {
    pub continuous_max: Option<u8>,
    pub zone3_bounds: Option<Bounds>,
    pub zone4_bounds: Option<Bounds>,
    pub zone4_min_zones: Option<u8>,
    pub odd_even_band: Option<Bounds>,
    pub sum_min: Option<u32>,
    pub sum_max: Option<u32>,
    pub last_digit_max: Option<u8>,
    pub pull_bounds: Option<Bounds>,

    pub continuous_weight: Option<f64>,
    pub zone3_weight: Option<f64>,
    pub zone4_weight: Option<f64>,
    pub odd_even_weight: Option<f64>,
    pub sum_weight: Option<f64>,
    pub last_digit_weight: Option<f64>,
    pub pull_weight: Option<f64>,
    pub frequency_weight: Option<f64>,
}

macro_rules! for_each_key {
    ($apply:ident) => {
        $apply!(continuous_max);
        $apply!(zone3_bounds);
        $apply!(zone4_bounds);
        $apply!(zone4_min_zones);
        $apply!(odd_even_band);
        $apply!(sum_min);
        $apply!(sum_max);
        $apply!(last_digit_max);
        $apply!(pull_bounds);
        $apply!(continuous_weight);
        $apply!(zone3_weight);
        $apply!(zone4_weight);
        $apply!(odd_even_weight);
        $apply!(sum_weight);
        $apply!(last_digit_weight);
        $apply!(pull_weight);
        $apply!(frequency_weight);
    };
}

impl FilterConfigPatch {
    pub fn from_json_str(content: &str) -> LfResult<Self> {
        serde_json::from_str(content).map_err(|e| LotoError::Config(format!("Invalid filter config: {}", e)))
    }
}

impl FilterConfig {
    /// Key-by-key merge: every key present in `patch` replaces ours.
    pub fn merged(&self, patch: &FilterConfigPatch) -> FilterConfig {
        let mut out = self.clone();
        macro_rules! apply {
            ($field:ident) => {
                if let Some(v) = patch.$field {
                    out.$field = v;
                }
            };
        }
        for_each_key!(apply);
        out
    }

    /// Defaults, overlaid with a partial JSON config file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LotoError::Config(format!("Failed to read config '{}': {}", path.display(), e)))?;
        let patch = FilterConfigPatch::from_json_str(&content)?;
        let config = FilterConfig::default().merged(&patch);
        config.validate()?;
        Ok(config)
    }

    /// Copies over only the flags the user typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &FilterConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }
        for_each_key!(update_if_present);
    }

    pub fn validate(&self) -> LfResult<()> {
        let max_count = MAIN_COUNT as u8;
        for (name, band) in [
            ("zone3_bounds", self.zone3_bounds),
            ("zone4_bounds", self.zone4_bounds),
            ("odd_even_band", self.odd_even_band),
            ("pull_bounds", self.pull_bounds),
        ] {
            if band.min > band.max {
                return Err(LotoError::Config(format!("{} has min {} above max {}", name, band.min, band.max)));
            }
            if band.max > max_count {
                return Err(LotoError::Config(format!(
                    "{} max {} exceeds the {} main numbers",
                    name, band.max, max_count
                )));
            }
        }
        if self.sum_min > self.sum_max {
            return Err(LotoError::Config(format!(
                "sum_min {} is above sum_max {}",
                self.sum_min, self.sum_max
            )));
        }
        if self.last_digit_max == 0 {
            return Err(LotoError::Config("last_digit_max must be at least 1".into()));
        }
        if self.zone4_min_zones > 4 {
            return Err(LotoError::Config(format!(
                "zone4_min_zones {} exceeds the 4 zones",
                self.zone4_min_zones
            )));
        }
        for component in ScoreComponent::ALL {
            let w = self.weight(component);
            if !w.is_finite() || w < 0.0 {
                return Err(LotoError::Config(format!("{} weight must be a non-negative number, got {}", component, w)));
            }
            if w > MAX_WEIGHT {
                return Err(LotoError::Config(format!(
                    "{} weight {} exceeds the maximum of {}",
                    component, w, MAX_WEIGHT
                )));
            }
        }
        Ok(())
    }

    pub fn weight(&self, component: ScoreComponent) -> f64 {
        match component {
            ScoreComponent::Continuous => self.continuous_weight,
            ScoreComponent::Zone3 => self.zone3_weight,
            ScoreComponent::Zone4 => self.zone4_weight,
            ScoreComponent::OddEven => self.odd_even_weight,
            ScoreComponent::Sum => self.sum_weight,
            ScoreComponent::LastDigits => self.last_digit_weight,
            ScoreComponent::Pull => self.pull_weight,
            ScoreComponent::Frequency => self.frequency_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_parsing() {
        assert_eq!("1,5".parse::<Bounds>().unwrap(), Bounds::new(1, 5));
        assert_eq!(" 2 - 4 ".parse::<Bounds>().unwrap(), Bounds::new(2, 4));
        assert!("1,2,3".parse::<Bounds>().is_err());
        assert!("a,b".parse::<Bounds>().is_err());
    }

    #[test]
    fn test_bounds_json_shape() {
        let json = serde_json::to_string(&Bounds::new(0, 3)).unwrap();
        assert_eq!(json, "[0,3]");
        let back: Bounds = serde_json::from_str("[2,5]").unwrap();
        assert_eq!(back, Bounds::new(2, 5));
    }
}

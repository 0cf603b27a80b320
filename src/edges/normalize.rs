//! Mapping raw magnitudes to a displayable range.
use crate::image::Grid;
use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ceiling used by the command-line policies.
pub const DEFAULT_CEILING: u8 = 255;

/// How raw gradient magnitudes are mapped into `[0, ceiling]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "ceiling", rename_all = "camelCase")]
pub enum OutputPolicy {
    /// `min(cell, ceiling)`
    Clamp(u8),
    /// `round(cell / max · ceiling)`; all-zero input is returned untouched.
    NormalizeToMax(u8),
}

impl OutputPolicy {
    pub const fn clamp() -> Self {
        OutputPolicy::Clamp(DEFAULT_CEILING)
    }

    pub const fn normalize_to_max() -> Self {
        OutputPolicy::NormalizeToMax(DEFAULT_CEILING)
    }

    pub fn ceiling(&self) -> u8 {
        match *self {
            OutputPolicy::Clamp(c) | OutputPolicy::NormalizeToMax(c) => c,
        }
    }
}

impl Default for OutputPolicy {
    fn default() -> Self {
        Self::clamp()
    }
}

impl FromStr for OutputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clamp" => Ok(Self::clamp()),
            "normalize" => Ok(Self::normalize_to_max()),
            other => Err(format!(
                "unknown output policy '{other}' (expected clamp|normalize)"
            )),
        }
    }
}

/// Apply `policy` to a magnitude grid whose largest value is `max_mag`.
pub fn normalize(mag: &Grid, max_mag: i32, policy: OutputPolicy) -> Grid {
    let ceiling = policy.ceiling() as i32;
    match policy {
        OutputPolicy::Clamp(_) => mag.map(|v| v.clamp(0, ceiling)),
        OutputPolicy::NormalizeToMax(_) => {
            if max_mag <= 0 {
                warn!(
                    "normalize: max magnitude is {max_mag} on a {}x{} grid, leaving it unscaled",
                    mag.w, mag.h
                );
                return mag.clone();
            }
            let max = max_mag as f64;
            mag.map(|v| ((v as f64 / max * ceiling as f64).round() as i32).clamp(0, ceiling))
        }
    }
}

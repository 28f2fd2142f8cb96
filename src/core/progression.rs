//! Experience needed to advance from one level to the next.
//!
//! Two curves exist. Both are strictly increasing over their level domain
//! (`1..=max_level()`) and never return zero. Characters carry the curve they
//! level on; the default is [`LevelCurve::Exponential`].

use super::constants::{
    EXPONENTIAL_MAX_LEVEL, EXPONENTIAL_XP_BASE, EXPONENTIAL_XP_GROWTH, QUADRATIC_XP_A,
    QUADRATIC_XP_B, QUADRATIC_XP_C, STARTING_LEVEL,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selectable XP-to-next-level curve.
///
/// Each curve is defined for levels `1..=max_level()`, the range where its
/// requirement fits in a `u64`. Levels outside it are clamped into it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LevelCurve {
    /// `round(0.25*(L-1)^2 + 10*(L-1) + 139.75)`
    Quadratic,
    /// `round(100 * 1.15^(L-1))`
    #[default]
    Exponential,
}

impl LevelCurve {
    pub fn all() -> [LevelCurve; 2] {
        [LevelCurve::Quadratic, LevelCurve::Exponential]
    }

    pub fn name(&self) -> &'static str {
        match self {
            LevelCurve::Quadratic => "quadratic",
            LevelCurve::Exponential => "exponential",
        }
    }

    /// Highest level the curve is defined for. Characters stop levelling here.
    pub fn max_level(&self) -> u32 {
        match self {
            LevelCurve::Quadratic => u32::MAX,
            LevelCurve::Exponential => EXPONENTIAL_MAX_LEVEL,
        }
    }

    /// XP required to go from `level` to `level + 1`. Levels below 1 count as 1,
    /// levels above [`max_level`](Self::max_level) as the maximum.
    pub fn xp_to_next(&self, level: u32) -> u64 {
        let level = level.clamp(STARTING_LEVEL, self.max_level());
        match self {
            LevelCurve::Quadratic => quadratic_xp_to_next(level),
            LevelCurve::Exponential => exponential_xp_to_next(level),
        }
    }

    /// Cumulative XP needed to reach `level` from level 1, saturating.
    pub fn total_xp_for_level(&self, level: u32) -> u64 {
        (STARTING_LEVEL..level.clamp(STARTING_LEVEL, self.max_level()))
            .map(|l| self.xp_to_next(l))
            .fold(0u64, u64::saturating_add)
    }
}

impl fmt::Display for LevelCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LevelCurve {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quadratic" => Ok(LevelCurve::Quadratic),
            "exponential" => Ok(LevelCurve::Exponential),
            other => Err(format!("unknown level curve: {other}")),
        }
    }
}

/// Turn an arbitrary number into a level: fractional levels floor,
/// anything below 1 (or non-finite) becomes 1.
pub fn sanitize_level(raw: f64) -> u32 {
    if !raw.is_finite() || raw < STARTING_LEVEL as f64 {
        return STARTING_LEVEL;
    }
    // `as` saturates at u32::MAX
    raw.floor() as u32
}

fn levels_gained(level: u32) -> f64 {
    (level.max(STARTING_LEVEL) - STARTING_LEVEL) as f64
}

/// Quadratic curve. 140 XP at level 1.
pub fn quadratic_xp_to_next(level: u32) -> u64 {
    let n = levels_gained(level);
    let xp = QUADRATIC_XP_A * n * n + QUADRATIC_XP_B * n + QUADRATIC_XP_C;
    // `as` saturates on overflow
    xp.round() as u64
}

/// Exponential curve. 100 XP at level 1, +15% per level.
///
/// Levels above [`EXPONENTIAL_MAX_LEVEL`] are treated as that level.
pub fn exponential_xp_to_next(level: u32) -> u64 {
    let n = levels_gained(level.min(EXPONENTIAL_MAX_LEVEL));
    (EXPONENTIAL_XP_BASE * EXPONENTIAL_XP_GROWTH.powf(n)).round() as u64
}

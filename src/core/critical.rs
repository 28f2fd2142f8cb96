//! Critical hit chance and multiplier.
//!
//! Both scale linearly with a strength-like attribute. The engine never rolls
//! for a critical itself; callers roll against [`critical_chance`] and pass the
//! outcome back in as a flag.

use super::constants::{
    BASE_CRITICAL_CHANCE, BASE_CRITICAL_MULTIPLIER, MAX_CRITICAL_CHANCE, STAT_CRITICAL_DIVISOR,
};
use super::rounding::{round2, round3};
use super::task_value::sanitize_attribute;

/// Chance of a critical hit, `0.05` at zero strength, capped at `0.75`.
///
/// Rounded to 3 places. The cap is itself a 3-place value, so capping first
/// gives the same result.
pub fn critical_chance(strength: f64) -> f64 {
    let strength = sanitize_attribute(strength);
    let chance = BASE_CRITICAL_CHANCE + strength / (STAT_CRITICAL_DIVISOR * 2.0);
    round3(chance.min(MAX_CRITICAL_CHANCE))
}

/// Multiplier applied to a reward on a critical hit, `1.5` at zero strength. Uncapped.
pub fn critical_multiplier(strength: f64) -> f64 {
    let strength = sanitize_attribute(strength);
    round2(BASE_CRITICAL_MULTIPLIER + strength / STAT_CRITICAL_DIVISOR)
}

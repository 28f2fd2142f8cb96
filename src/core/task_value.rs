//! Task value normalisation.
//!
//! Every formula routes its task value through [`clamp_task_value`] and its
//! attribute scores through [`sanitize_attribute`], which keeps the engine
//! total: no input can make a formula fail or return a non-finite number.

use super::constants::{TASK_VALUE_CEILING, TASK_VALUE_FLOOR};

/// Map NaN and ±Infinity to `0.0`, pass finite values through.
pub fn to_finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Clamp a raw task value into `[TASK_VALUE_FLOOR, TASK_VALUE_CEILING]`.
///
/// Non-finite input is treated as `0.0` before clamping. Idempotent.
pub fn clamp_task_value(value: f64) -> f64 {
    to_finite(value).clamp(TASK_VALUE_FLOOR, TASK_VALUE_CEILING)
}

/// Clamped task value floored at zero. Rewards, boss damage and drop chances
/// only ever see this.
pub fn positive_task_value(value: f64) -> f64 {
    clamp_task_value(value).max(0.0)
}

/// Attribute scores are non-negative; anything else counts as zero.
pub fn sanitize_attribute(score: f64) -> f64 {
    to_finite(score).max(0.0)
}

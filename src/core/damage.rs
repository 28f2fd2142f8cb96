//! Damage formulas.
//!
//! Tavern damage is what the character takes when a task goes badly; boss
//! damage is what a completed task deals to the current quest monster.

use super::constants::{
    BOSS_DEFENSE_DIVISOR, MIN_TAVERN_DAMAGE, STAT_CRITICAL_DIVISOR, TAVERN_DAMAGE_PER_VALUE,
};
use super::rounding::round2;
use super::task::Monster;
use super::task_value::{clamp_task_value, positive_task_value, sanitize_attribute};

/// Damage taken from a task's value.
///
/// Neutral or positive values deal the fixed minimum; negative values deal a
/// quarter of their magnitude, never less than the minimum.
pub fn tavern_damage(task_value: f64) -> f64 {
    let clamped = clamp_task_value(task_value);

    if clamped >= 0.0 {
        return MIN_TAVERN_DAMAGE;
    }

    round2((-clamped * TAVERN_DAMAGE_PER_VALUE).max(MIN_TAVERN_DAMAGE))
}

/// Damage dealt to a boss, mitigated by its defense. Never negative.
///
/// # Arguments
/// * `task_value` - Raw task value; non-positive values deal nothing
/// * `strength` - Attacker's strength-like attribute
/// * `defense` - Boss defense (`0.0` for none)
pub fn boss_damage(task_value: f64, strength: f64, defense: f64) -> f64 {
    let value = positive_task_value(task_value);
    if value == 0.0 {
        return 0.0;
    }

    let attack_multiplier = 1.0 + sanitize_attribute(strength) / STAT_CRITICAL_DIVISOR;
    let base_damage = value * attack_multiplier;
    let mitigated = base_damage - sanitize_attribute(defense) / BOSS_DEFENSE_DIVISOR;

    round2(mitigated.max(0.0))
}

/// [`boss_damage`] against a monster record.
pub fn boss_damage_against(task_value: f64, strength: f64, monster: &Monster) -> f64 {
    boss_damage(task_value, strength, monster.defense)
}

//! Turns a task plus a character snapshot into the deltas the owner applies.
//!
//! Nothing here touches character state. The caller rolls the critical,
//! resolves the outcome, and applies it to its own snapshot.

use super::damage::{boss_damage_against, tavern_damage};
use super::drops::drop_rate;
use super::rewards::{RewardInput, RewardStrategy};
use super::task::{Monster, Task};
use crate::character::attributes::StatBlock;
use serde::{Deserialize, Serialize};

/// Changes produced by one task, ready to be applied to a character.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct OutcomeDelta {
    pub experience: f64,
    pub gold: f64,
    /// Health the character loses.
    pub damage_taken: f64,
    /// Damage dealt to the active boss, if any.
    pub boss_damage: f64,
    /// Probability the caller should roll an item drop against.
    pub drop_chance: f64,
    pub is_critical: bool,
}

/// Outcome of completing a task.
///
/// Experience scales with intelligence, gold with perception, and the
/// critical multiplier (when `is_critical`) with strength. Boss damage is only
/// dealt when a monster is supplied.
pub fn resolve_completion(
    strategy: &impl RewardStrategy,
    task: &Task,
    stats: &StatBlock,
    monster: Option<&Monster>,
    is_critical: bool,
) -> OutcomeDelta {
    let experience_input = RewardInput::for_task(task, stats.intelligence())
        .critical(is_critical)
        .with_critical_attribute(stats.strength());
    let gold_input = RewardInput::for_task(task, stats.perception())
        .critical(is_critical)
        .with_critical_attribute(stats.strength());

    let rewards = strategy.rewards(&experience_input, &gold_input);

    OutcomeDelta {
        experience: rewards.experience,
        gold: rewards.gold,
        damage_taken: 0.0,
        boss_damage: monster
            .map(|m| boss_damage_against(task.value, stats.strength(), m))
            .unwrap_or(0.0),
        drop_chance: drop_rate(task.value, stats.perception()),
        is_critical,
    }
}

/// Outcome of failing a task: tavern damage only.
pub fn resolve_failure(task: &Task) -> OutcomeDelta {
    OutcomeDelta {
        damage_taken: tavern_damage(task.value),
        ..Default::default()
    }
}

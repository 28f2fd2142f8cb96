//! Balance constants shared by the formula engine, the character state and the simulator.
//!
//! Change once, test everywhere.

// =============================================================================
// TASK VALUE
// =============================================================================

/// Lowest task value any formula will see (a badly overdue task).
pub const TASK_VALUE_FLOOR: f64 = -47.27;

/// Highest task value any formula will see (a well established task).
pub const TASK_VALUE_CEILING: f64 = 21.27;

// =============================================================================
// CRITICAL HITS
// =============================================================================

/// Critical chance at zero strength.
pub const BASE_CRITICAL_CHANCE: f64 = 0.05;

/// Hard cap on critical chance.
pub const MAX_CRITICAL_CHANCE: f64 = 0.75;

/// Critical multiplier at zero strength.
pub const BASE_CRITICAL_MULTIPLIER: f64 = 1.5;

/// Strength divisor for the critical multiplier and the boss attack multiplier.
/// Critical chance grows at half this rate (divisor * 2).
pub const STAT_CRITICAL_DIVISOR: f64 = 200.0;

// =============================================================================
// DAMAGE
// =============================================================================

/// Tavern damage never drops below this, even for positive task values.
pub const MIN_TAVERN_DAMAGE: f64 = 0.1;

/// Tavern damage per point of negative task value.
pub const TAVERN_DAMAGE_PER_VALUE: f64 = 0.25;

/// Each point of boss defense removes 1/100 of a damage point.
pub const BOSS_DEFENSE_DIVISOR: f64 = 100.0;

// =============================================================================
// REWARDS
// =============================================================================

/// Attribute divisor for the reward multiplier (1 + attr / 100).
pub const ATTRIBUTE_REWARD_DIVISOR: f64 = 100.0;

/// Experience base multiplier (driven by intelligence).
pub const EXPERIENCE_BASE_MULTIPLIER: f64 = 0.6;

/// Gold base multiplier (driven by perception).
pub const GOLD_BASE_MULTIPLIER: f64 = 0.4;

/// Streak bonus gained per consecutive completion (priority-weighted rewards only).
pub const STREAK_BONUS_PER_COMPLETION: f64 = 0.01;

/// Cap on the streak bonus (+50%).
pub const MAX_STREAK_BONUS: f64 = 0.5;

// =============================================================================
// ITEM DROPS
// =============================================================================

/// Drop chance with zero task value and zero perception.
pub const DROP_BASE_CHANCE: f64 = 0.3;

/// Task value divisor for the drop chance.
pub const DROP_VALUE_DIVISOR: f64 = 60.0;

/// Perception divisor for the drop chance.
pub const DROP_PERCEPTION_DIVISOR: f64 = 200.0;

/// Drop chance never exceeds this.
pub const MAX_DROP_CHANCE: f64 = 0.9;

// =============================================================================
// LEVELING
// =============================================================================

/// Quadratic curve: xp = A*(L-1)^2 + B*(L-1) + C
pub const QUADRATIC_XP_A: f64 = 0.25;
pub const QUADRATIC_XP_B: f64 = 10.0;
pub const QUADRATIC_XP_C: f64 = 139.75;

/// Exponential curve: xp = BASE * GROWTH^(L-1)
pub const EXPONENTIAL_XP_BASE: f64 = 100.0;
pub const EXPONENTIAL_XP_GROWTH: f64 = 1.15;

/// Highest level on the exponential curve; level 286 would need more than `u64::MAX` XP.
pub const EXPONENTIAL_MAX_LEVEL: u32 = 285;

// =============================================================================
// CHARACTER DEFAULTS
// =============================================================================

pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_MAX_HP: f64 = 50.0;
pub const NUM_ATTRIBUTES: usize = 4;

//! Formula engine: task value, criticals, damage, rewards, drops and leveling.

pub mod constants;
pub mod critical;
pub mod damage;
pub mod drops;
pub mod outcome;
pub mod progression;
pub mod rewards;
pub mod rounding;
pub mod task;
pub mod task_value;

pub use critical::{critical_chance, critical_multiplier};
pub use damage::{boss_damage, boss_damage_against, tavern_damage};
pub use drops::drop_rate;
pub use outcome::{resolve_completion, resolve_failure, OutcomeDelta};
pub use progression::{sanitize_level, LevelCurve};
pub use rewards::{
    experience, gold, RewardInput, RewardKind, RewardModel, RewardResult, RewardStrategy,
    SimpleAttribute, TaskPriorityWeighted,
};
pub use rounding::{round2, round3, round_to};
pub use task::{Monster, Task, TaskPriority, TaskType};
pub use task_value::{clamp_task_value, positive_task_value};

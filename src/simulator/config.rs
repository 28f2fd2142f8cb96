//! Simulation configuration.

use crate::character::attributes::StatBlock;
use crate::core::constants::{TASK_VALUE_CEILING, TASK_VALUE_FLOOR};
use crate::core::progression::LevelCurve;
use crate::core::rewards::RewardModel;
use crate::core::task::TaskPriority;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated characters
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Tasks each character resolves
    pub tasks_per_run: u32,

    /// Chance (0-1) that a task is failed instead of completed
    pub failure_rate: f64,

    /// Task values are drawn uniformly from this range
    pub min_task_value: f64,
    pub max_task_value: f64,

    /// Priority given to every simulated task
    pub priority: TaskPriority,

    pub reward_model: RewardModel,
    pub curve: LevelCurve,

    /// Attribute scores of every simulated character
    pub stats: StatBlock,

    /// Defense of a boss fought on every completion (None = no boss)
    pub boss_defense: Option<f64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            tasks_per_run: 365,
            failure_rate: 0.2,
            min_task_value: -10.0,
            max_task_value: 10.0,
            priority: TaskPriority::Easy,
            reward_model: RewardModel::SimpleAttribute,
            curve: LevelCurve::Exponential,
            stats: StatBlock::new(10.0, 10.0, 10.0, 10.0),
            boss_defense: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast balance check
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            tasks_per_run: 90,
            ..Default::default()
        }
    }

    /// Every completion also hits a boss with the given defense
    pub fn boss_fight(defense: f64) -> Self {
        Self {
            boss_defense: Some(defense),
            ..Default::default()
        }
    }

    /// Task value range clamped to the engine's domain, low end first.
    pub fn task_value_range(&self) -> (f64, f64) {
        let clamp = |v: f64| {
            if v.is_finite() {
                v.clamp(TASK_VALUE_FLOOR, TASK_VALUE_CEILING)
            } else {
                0.0
            }
        };
        let (a, b) = (clamp(self.min_task_value), clamp(self.max_task_value));
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

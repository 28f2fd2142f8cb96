//! Experience and gold rewards.
//!
//! Two interchangeable strategies sit behind [`RewardStrategy`]:
//! - [`SimpleAttribute`]: task value and a single attribute score.
//! - [`TaskPriorityWeighted`]: the same curve, weighted by task priority and streak.
//!
//! Callers pick one explicitly, usually through [`RewardModel`].

use super::constants::{
    ATTRIBUTE_REWARD_DIVISOR, EXPERIENCE_BASE_MULTIPLIER, GOLD_BASE_MULTIPLIER, MAX_STREAK_BONUS,
    STREAK_BONUS_PER_COMPLETION,
};
use super::critical::critical_multiplier;
use super::rounding::round2;
use super::task::{Task, TaskPriority};
use super::task_value::{positive_task_value, sanitize_attribute};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which currency a reward is paid in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RewardKind {
    Experience,
    Gold,
}

impl RewardKind {
    pub fn base_multiplier(&self) -> f64 {
        match self {
            RewardKind::Experience => EXPERIENCE_BASE_MULTIPLIER,
            RewardKind::Gold => GOLD_BASE_MULTIPLIER,
        }
    }
}

/// Gold and experience for one task, each rounded to 2 places.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RewardResult {
    pub gold: f64,
    pub experience: f64,
}

/// Inputs for a single reward calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RewardInput {
    pub task_value: f64,
    /// Attribute driving the reward (intelligence for experience, perception for gold).
    pub attribute: f64,
    /// Attribute driving the critical multiplier. `None` reuses `attribute`.
    pub critical_attribute: Option<f64>,
    pub is_critical: bool,
    pub priority: TaskPriority,
    pub streak: u32,
}

impl RewardInput {
    pub fn new(task_value: f64, attribute: f64) -> Self {
        Self {
            task_value,
            attribute,
            ..Default::default()
        }
    }

    /// Input for a task record, carrying its priority and streak.
    pub fn for_task(task: &Task, attribute: f64) -> Self {
        Self {
            task_value: task.value,
            attribute,
            priority: task.priority,
            streak: task.streak_or_zero(),
            ..Default::default()
        }
    }

    pub fn critical(mut self, is_critical: bool) -> Self {
        self.is_critical = is_critical;
        self
    }

    pub fn with_critical_attribute(mut self, critical_attribute: f64) -> Self {
        self.critical_attribute = Some(critical_attribute);
        self
    }
}

/// A way of turning a task into experience and gold.
pub trait RewardStrategy {
    /// Reward of the given kind, rounded to 2 places. Zero for non-positive task values.
    fn reward(&self, kind: RewardKind, input: &RewardInput) -> f64;

    /// Short identifier used in reports and on the command line.
    fn name(&self) -> &'static str;

    fn experience(&self, input: &RewardInput) -> f64 {
        self.reward(RewardKind::Experience, input)
    }

    fn gold(&self, input: &RewardInput) -> f64 {
        self.reward(RewardKind::Gold, input)
    }

    /// Both currencies at once: experience from `experience_input`, gold from `gold_input`.
    fn rewards(&self, experience_input: &RewardInput, gold_input: &RewardInput) -> RewardResult {
        RewardResult {
            gold: self.gold(gold_input),
            experience: self.experience(experience_input),
        }
    }
}

/// Unrounded reward shared by both strategies.
fn attribute_reward(kind: RewardKind, input: &RewardInput) -> f64 {
    let value = positive_task_value(input.task_value);
    if value == 0.0 {
        return 0.0;
    }

    let attribute = sanitize_attribute(input.attribute);
    let attribute_multiplier = 1.0 + attribute / ATTRIBUTE_REWARD_DIVISOR;
    let mut reward = value * kind.base_multiplier() * attribute_multiplier;

    if input.is_critical {
        reward *= critical_multiplier(input.critical_attribute.unwrap_or(attribute));
    }

    reward
}

/// Reward from task value and one attribute. Priority and streak are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleAttribute;

impl RewardStrategy for SimpleAttribute {
    fn reward(&self, kind: RewardKind, input: &RewardInput) -> f64 {
        round2(attribute_reward(kind, input))
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

/// [`SimpleAttribute`] weighted by task priority and a capped streak bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskPriorityWeighted;

impl TaskPriorityWeighted {
    /// `1 + min(streak * 0.01, 0.5)`
    pub fn streak_bonus(streak: u32) -> f64 {
        1.0 + (streak as f64 * STREAK_BONUS_PER_COMPLETION).min(MAX_STREAK_BONUS)
    }
}

impl RewardStrategy for TaskPriorityWeighted {
    fn reward(&self, kind: RewardKind, input: &RewardInput) -> f64 {
        let base = attribute_reward(kind, input);
        round2(base * input.priority.multiplier() * Self::streak_bonus(input.streak))
    }

    fn name(&self) -> &'static str {
        "weighted"
    }
}

/// Selectable reward strategy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RewardModel {
    #[default]
    SimpleAttribute,
    TaskPriorityWeighted,
}

impl RewardModel {
    pub fn all() -> [RewardModel; 2] {
        [RewardModel::SimpleAttribute, RewardModel::TaskPriorityWeighted]
    }
}

impl RewardStrategy for RewardModel {
    fn reward(&self, kind: RewardKind, input: &RewardInput) -> f64 {
        match self {
            RewardModel::SimpleAttribute => SimpleAttribute.reward(kind, input),
            RewardModel::TaskPriorityWeighted => TaskPriorityWeighted.reward(kind, input),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            RewardModel::SimpleAttribute => SimpleAttribute.name(),
            RewardModel::TaskPriorityWeighted => TaskPriorityWeighted.name(),
        }
    }
}

impl fmt::Display for RewardModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RewardModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" | "simple-attribute" => Ok(RewardModel::SimpleAttribute),
            "weighted" | "task-priority-weighted" => Ok(RewardModel::TaskPriorityWeighted),
            other => Err(format!("unknown reward model: {other}")),
        }
    }
}

/// Experience for a task value and intelligence score ([`SimpleAttribute`]).
pub fn experience(task_value: f64, intelligence: f64, is_critical: bool) -> f64 {
    SimpleAttribute.experience(&RewardInput::new(task_value, intelligence).critical(is_critical))
}

/// Gold for a task value and perception score ([`SimpleAttribute`]).
pub fn gold(task_value: f64, perception: f64, is_critical: bool) -> f64 {
    SimpleAttribute.gold(&RewardInput::new(task_value, perception).critical(is_critical))
}

//! Task and monster records handed to the formula engine.
//!
//! These are read-only inputs. The engine never stores or mutates them.

use serde::{Deserialize, Serialize};

/// Task categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    #[default]
    Habit,
    Daily,
    Todo,
    Reward,
}

impl TaskType {
    pub fn all() -> [TaskType; 4] {
        [
            TaskType::Habit,
            TaskType::Daily,
            TaskType::Todo,
            TaskType::Reward,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TaskType::Habit => "habit",
            TaskType::Daily => "daily",
            TaskType::Todo => "todo",
            TaskType::Reward => "reward",
        }
    }
}

/// Difficulty picked by the player. Each maps to a fixed reward weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Trivial,
    #[default]
    Easy,
    Medium,
    Hard,
}

impl TaskPriority {
    pub fn all() -> [TaskPriority; 4] {
        [
            TaskPriority::Trivial,
            TaskPriority::Easy,
            TaskPriority::Medium,
            TaskPriority::Hard,
        ]
    }

    /// Reward weight: 0.1, 1, 1.5 or 2.
    pub fn multiplier(&self) -> f64 {
        match self {
            TaskPriority::Trivial => 0.1,
            TaskPriority::Easy => 1.0,
            TaskPriority::Medium => 1.5,
            TaskPriority::Hard => 2.0,
        }
    }
}

/// A completed or failed task as seen by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Task {
    /// Dynamic value; positive when the task is well kept, negative when overdue.
    pub value: f64,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub priority: TaskPriority,
    /// Consecutive completions, when the task tracks them.
    #[serde(default)]
    pub streak: Option<u32>,
}

impl Task {
    pub fn new(value: f64, task_type: TaskType, priority: TaskPriority) -> Self {
        Self {
            value,
            task_type,
            priority,
            streak: None,
        }
    }

    pub fn with_streak(mut self, streak: u32) -> Self {
        self.streak = Some(streak);
        self
    }

    pub fn streak_or_zero(&self) -> u32 {
        self.streak.unwrap_or(0)
    }
}

/// Quest monster. Only the defense stat matters to the engine; the monster's
/// health and quest progress belong to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Monster {
    #[serde(default)]
    pub name: String,
    pub defense: f64,
}

impl Monster {
    pub fn new(name: impl Into<String>, defense: f64) -> Self {
        Self {
            name: name.into(),
            defense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_multipliers() {
        assert_eq!(TaskPriority::Trivial.multiplier(), 0.1);
        assert_eq!(TaskPriority::Easy.multiplier(), 1.0);
        assert_eq!(TaskPriority::Medium.multiplier(), 1.5);
        assert_eq!(TaskPriority::Hard.multiplier(), 2.0);
    }

    #[test]
    fn test_priority_multipliers_increase() {
        let all = TaskPriority::all();
        for pair in all.windows(2) {
            assert!(pair[1].multiplier() > pair[0].multiplier());
        }
    }

    #[test]
    fn test_task_streak_defaults_to_zero() {
        let task = Task::new(3.0, TaskType::Daily, TaskPriority::Medium);
        assert_eq!(task.streak_or_zero(), 0);
        assert_eq!(task.with_streak(7).streak_or_zero(), 7);
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task::new(1.5, TaskType::Todo, TaskPriority::Hard).with_streak(2);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["type"], "todo");
        assert_eq!(json["priority"], "hard");
        assert_eq!(json["streak"], 2);

        let parsed: Task = serde_json::from_str(r#"{"value": -2.0, "type": "daily", "priority": "easy"}"#).unwrap();
        assert_eq!(parsed.task_type, TaskType::Daily);
        assert_eq!(parsed.streak, None);
    }

    #[test]
    fn test_task_type_names() {
        let names: Vec<_> = TaskType::all().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["habit", "daily", "todo", "reward"]);
    }
}

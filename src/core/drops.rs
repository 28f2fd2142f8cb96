use super::constants::{
    DROP_BASE_CHANCE, DROP_PERCEPTION_DIVISOR, DROP_VALUE_DIVISOR, MAX_DROP_CHANCE,
};
use super::rounding::round3;
use super::task_value::{positive_task_value, sanitize_attribute};

/// Item drop probability for a completed task, in `[0, 0.9]`, 3 places.
///
/// Starts at 0.3 and grows with both the task value and perception.
pub fn drop_rate(task_value: f64, perception: f64) -> f64 {
    let value = positive_task_value(task_value);
    let perception = sanitize_attribute(perception);

    let chance =
        DROP_BASE_CHANCE + value / DROP_VALUE_DIVISOR + perception / DROP_PERCEPTION_DIVISOR;

    round3(chance.min(MAX_DROP_CHANCE))
}

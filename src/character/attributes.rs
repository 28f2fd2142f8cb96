use crate::core::constants::NUM_ATTRIBUTES;
use crate::core::task_value::sanitize_attribute;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttributeType {
    Strength,
    Intelligence,
    Constitution,
    Perception,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Strength,
            AttributeType::Intelligence,
            AttributeType::Constitution,
            AttributeType::Perception,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            AttributeType::Strength => "STR",
            AttributeType::Intelligence => "INT",
            AttributeType::Constitution => "CON",
            AttributeType::Perception => "PER",
        }
    }
}

/// Resolved attribute scores for one character. Values are always finite and non-negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct StatBlock {
    #[serde(rename = "str")]
    strength: f64,
    #[serde(rename = "int")]
    intelligence: f64,
    #[serde(rename = "con")]
    constitution: f64,
    #[serde(rename = "per")]
    perception: f64,
}

impl StatBlock {
    pub fn new(strength: f64, intelligence: f64, constitution: f64, perception: f64) -> Self {
        Self {
            strength: sanitize_attribute(strength),
            intelligence: sanitize_attribute(intelligence),
            constitution: sanitize_attribute(constitution),
            perception: sanitize_attribute(perception),
        }
    }

    pub fn get(&self, attr: AttributeType) -> f64 {
        match attr {
            AttributeType::Strength => self.strength,
            AttributeType::Intelligence => self.intelligence,
            AttributeType::Constitution => self.constitution,
            AttributeType::Perception => self.perception,
        }
    }

    /// Negative or non-finite scores are stored as zero.
    pub fn set(&mut self, attr: AttributeType, value: f64) {
        let value = sanitize_attribute(value);
        match attr {
            AttributeType::Strength => self.strength = value,
            AttributeType::Intelligence => self.intelligence = value,
            AttributeType::Constitution => self.constitution = value,
            AttributeType::Perception => self.perception = value,
        }
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn intelligence(&self) -> f64 {
        self.intelligence
    }

    pub fn constitution(&self) -> f64 {
        self.constitution
    }

    pub fn perception(&self) -> f64 {
        self.perception
    }
}

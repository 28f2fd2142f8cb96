//! Owned character state.
//!
//! The formula engine only ever sees a copy of this; the owner applies the
//! returned [`OutcomeDelta`] here. Every effective change bumps `version` so
//! holders of an older copy can tell it is stale.

use crate::core::constants::{STARTING_LEVEL, STARTING_MAX_HP};
use crate::core::outcome::OutcomeDelta;
use crate::core::progression::LevelCurve;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Head,
    Body,
    Weapon,
    Offhand,
    Accessory,
}

/// Slot → equipped item id.
pub type EquipmentLoadout = BTreeMap<EquipmentSlot, String>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSnapshot {
    #[serde(default)]
    pub version: u64,
    pub level: u32,
    pub xp: f64,
    /// Zero in older documents; [`UserSnapshot::hydrate`] recomputes it.
    #[serde(default)]
    pub xp_to_next: u64,
    pub hp: f64,
    pub max_hp: f64,
    pub coins: f64,
    #[serde(default)]
    pub curve: LevelCurve,
    #[serde(default)]
    pub equipment: EquipmentLoadout,
}

impl Default for UserSnapshot {
    fn default() -> Self {
        Self::new(LevelCurve::default())
    }
}

impl UserSnapshot {
    /// Fresh level 1 character at full health.
    pub fn new(curve: LevelCurve) -> Self {
        Self {
            version: 0,
            level: STARTING_LEVEL,
            xp: 0.0,
            xp_to_next: curve.xp_to_next(STARTING_LEVEL),
            hp: STARTING_MAX_HP,
            max_hp: STARTING_MAX_HP,
            coins: 0.0,
            curve,
            equipment: EquipmentLoadout::new(),
        }
    }

    /// Repair a loaded snapshot: level inside the curve's domain, a missing XP requirement
    /// recomputed from the curve, health inside `[0, max_hp]`.
    pub fn hydrate(mut self) -> Self {
        self.level = self.level.clamp(STARTING_LEVEL, self.curve.max_level());
        if self.xp_to_next == 0 {
            self.xp_to_next = self.curve.xp_to_next(self.level);
        }
        self.max_hp = finite_or(self.max_hp, STARTING_MAX_HP).max(0.0);
        self.hp = finite_or(self.hp, self.max_hp).clamp(0.0, self.max_hp);
        self.xp = finite_or(self.xp, 0.0).max(0.0);
        self.coins = finite_or(self.coins, 0.0).max(0.0);
        self
    }

    /// Add experience, levelling up as many times as it covers.
    ///
    /// Non-positive amounts are ignored. At the curve's max level experience
    /// keeps accumulating without further level-ups. Returns the number of
    /// levels gained.
    pub fn add_xp(&mut self, amount: f64) -> u32 {
        if !amount.is_finite() || amount <= 0.0 {
            return 0;
        }

        let mut remaining = self.xp + amount;
        let mut gained = 0;

        while remaining >= self.xp_to_next as f64 && self.level < self.curve.max_level() {
            let next = remaining - self.xp_to_next as f64;
            if next == remaining {
                // Past f64 precision; no further level can be paid for.
                break;
            }
            remaining = next;
            self.level += 1;
            self.xp_to_next = self.curve.xp_to_next(self.level);
            gained += 1;
        }

        self.xp = remaining;
        self.touch();
        gained
    }

    /// Add (or with a negative amount, remove) coins. Never goes below zero.
    pub fn add_coins(&mut self, amount: f64) {
        if amount == 0.0 || !amount.is_finite() {
            return;
        }
        self.coins = (self.coins + amount).max(0.0);
        self.touch();
    }

    /// Spend coins if the character can afford it.
    ///
    /// Non-positive amounts always succeed without charging anything.
    pub fn spend_coins(&mut self, amount: f64) -> bool {
        if amount.is_nan() || amount <= 0.0 {
            return true;
        }
        if self.coins < amount {
            return false;
        }
        self.coins -= amount;
        self.touch();
        true
    }

    pub fn take_damage(&mut self, amount: f64) {
        if !amount.is_finite() || amount <= 0.0 {
            return;
        }
        self.hp = (self.hp - amount).max(0.0);
        self.touch();
    }

    pub fn heal(&mut self, amount: f64) {
        if !amount.is_finite() || amount <= 0.0 {
            return;
        }
        self.hp = (self.hp + amount).min(self.max_hp);
        self.touch();
    }

    pub fn equip(&mut self, slot: EquipmentSlot, item_id: impl Into<String>) {
        self.equipment.insert(slot, item_id.into());
        self.touch();
    }

    /// Returns the item id that was in the slot, if any.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<String> {
        let removed = self.equipment.remove(&slot);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Apply a task outcome. Returns the number of levels gained.
    pub fn apply(&mut self, delta: &OutcomeDelta) -> u32 {
        self.take_damage(delta.damage_taken);
        self.add_coins(delta.gold);
        self.add_xp(delta.experience)
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

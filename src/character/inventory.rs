//! Item stacks owned by a character.

use super::user::{EquipmentSlot, UserSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a consumable does when used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "amount", rename_all = "lowercase")]
pub enum ConsumableEffect {
    Heal(f64),
    Xp(f64),
    Coins(f64),
}

impl ConsumableEffect {
    fn apply(&self, user: &mut UserSnapshot) {
        match *self {
            ConsumableEffect::Heal(amount) => user.heal(amount),
            ConsumableEffect::Xp(amount) => {
                user.add_xp(amount);
            }
            ConsumableEffect::Coins(amount) => user.add_coins(amount),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InventoryItem {
    Consumable {
        id: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        effect: ConsumableEffect,
    },
    Equipment {
        id: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        slot: EquipmentSlot,
    },
}

impl InventoryItem {
    pub fn consumable(id: impl Into<String>, name: impl Into<String>, effect: ConsumableEffect) -> Self {
        InventoryItem::Consumable {
            id: id.into(),
            name: name.into(),
            description: None,
            effect,
        }
    }

    pub fn equipment(id: impl Into<String>, name: impl Into<String>, slot: EquipmentSlot) -> Self {
        InventoryItem::Equipment {
            id: id.into(),
            name: name.into(),
            description: None,
            slot,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            InventoryItem::Consumable { id, .. } | InventoryItem::Equipment { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            InventoryItem::Consumable { name, .. } | InventoryItem::Equipment { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryEntry {
    pub item: InventoryItem,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct InventorySnapshot {
    #[serde(default)]
    pub items: BTreeMap<String, InventoryEntry>,
}

impl InventorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self, item_id: &str) -> u32 {
        self.items.get(item_id).map(|e| e.quantity).unwrap_or(0)
    }

    /// Add `quantity` of an item. An existing stack keeps its original item definition.
    pub fn add_item(&mut self, item: InventoryItem, quantity: u32) {
        if quantity == 0 {
            return;
        }

        self.items
            .entry(item.id().to_string())
            .and_modify(|entry| entry.quantity = entry.quantity.saturating_add(quantity))
            .or_insert(InventoryEntry { item, quantity });
    }

    /// Remove up to `quantity`; the stack disappears when it reaches zero.
    pub fn remove_item(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(entry) = self.items.get_mut(item_id) {
            if entry.quantity > quantity {
                entry.quantity -= quantity;
            } else {
                self.items.remove(item_id);
            }
        }
    }

    /// Use an item: consumables apply their effect and are used up,
    /// equipment is equipped. Returns false if the item isn't owned.
    pub fn use_item(&mut self, item_id: &str, user: &mut UserSnapshot) -> bool {
        let item = match self.items.get(item_id) {
            Some(entry) => entry.item.clone(),
            None => return false,
        };

        match item {
            InventoryItem::Consumable { effect, .. } => {
                effect.apply(user);
                self.remove_item(item_id, 1);
            }
            InventoryItem::Equipment { id, slot, .. } => user.equip(slot, id),
        }
        true
    }

    /// Equip an owned equipment item. Consumables and unknown ids return false.
    pub fn equip_item(&self, item_id: &str, user: &mut UserSnapshot) -> bool {
        match self.items.get(item_id).map(|e| &e.item) {
            Some(InventoryItem::Equipment { id, slot, .. }) => {
                user.equip(*slot, id.clone());
                true
            }
            _ => false,
        }
    }

    pub fn unequip(&self, slot: EquipmentSlot, user: &mut UserSnapshot) -> Option<String> {
        user.unequip(slot)
    }
}

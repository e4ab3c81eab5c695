//! Player inventory: counted stacks keyed by string id plus the equipment
//! list. Engines validate against it before mutating, so a failed operation
//! leaves it untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::items::types::EquipmentInstance;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Materials and consumables, by item id.
    pub stacks: HashMap<String, u32>,
    pub equipment: Vec<EquipmentInstance>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self, id: &str) -> u32 {
        self.stacks.get(id).copied().unwrap_or(0)
    }

    pub fn has(&self, id: &str, quantity: u32) -> bool {
        self.quantity(id) >= quantity
    }

    pub fn add(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.stacks.entry(id.to_string()).or_insert(0) += quantity;
    }

    /// Remove `quantity` units of `id`, reporting the shortfall if the stack
    /// is too small. Empty stacks are dropped from the map.
    pub fn remove(&mut self, id: &str, quantity: u32) -> Result<(), CoreError> {
        let have = self.quantity(id);
        if have < quantity {
            return Err(CoreError::InsufficientMaterial {
                id: id.to_string(),
                have,
                need: quantity,
            });
        }
        if have == quantity {
            self.stacks.remove(id);
        } else {
            self.stacks.insert(id.to_string(), have - quantity);
        }
        Ok(())
    }

    pub fn add_equipment(&mut self, gear: EquipmentInstance) {
        self.equipment.push(gear);
    }

    pub fn equipment(&self, instance_id: &str) -> Option<&EquipmentInstance> {
        self.equipment.iter().find(|g| g.instance_id == instance_id)
    }

    pub fn equipment_mut(&mut self, instance_id: &str) -> Option<&mut EquipmentInstance> {
        self.equipment
            .iter_mut()
            .find(|g| g.instance_id == instance_id)
    }

    pub fn remove_equipment(&mut self, instance_id: &str) -> Option<EquipmentInstance> {
        let index = self
            .equipment
            .iter()
            .position(|g| g.instance_id == instance_id)?;
        Some(self.equipment.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::{EquipSlot, Rarity, StatBlock};

    #[test]
    fn test_add_and_quantity() {
        let mut inv = Inventory::new();
        assert_eq!(inv.quantity("iron_normal"), 0);
        inv.add("iron_normal", 5);
        inv.add("iron_normal", 3);
        assert_eq!(inv.quantity("iron_normal"), 8);
        assert!(inv.has("iron_normal", 8));
        assert!(!inv.has("iron_normal", 9));
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut inv = Inventory::new();
        inv.add("timber_good", 0);
        assert!(inv.stacks.is_empty());
    }

    #[test]
    fn test_remove_reports_shortfall() {
        let mut inv = Inventory::new();
        inv.add("hide_fine", 2);
        let err = inv.remove("hide_fine", 5).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientMaterial {
                id: "hide_fine".to_string(),
                have: 2,
                need: 5,
            }
        );
        // Failed removal leaves the stack intact
        assert_eq!(inv.quantity("hide_fine"), 2);
    }

    #[test]
    fn test_remove_drains_stack() {
        let mut inv = Inventory::new();
        inv.add("bone_normal", 4);
        inv.remove("bone_normal", 4).unwrap();
        assert_eq!(inv.quantity("bone_normal"), 0);
        assert!(!inv.stacks.contains_key("bone_normal"));
    }

    #[test]
    fn test_equipment_find_and_remove() {
        let mut inv = Inventory::new();
        let gear = EquipmentInstance::new(
            EquipSlot::Weapon,
            Rarity::Rare,
            "Engraved Machete".to_string(),
            StatBlock::zero(),
        );
        let id = gear.instance_id.clone();
        inv.add_equipment(gear);

        assert!(inv.equipment(&id).is_some());
        inv.equipment_mut(&id).unwrap().enhance_level = 3;
        assert_eq!(inv.equipment(&id).unwrap().enhance_level, 3);

        let removed = inv.remove_equipment(&id).unwrap();
        assert_eq!(removed.instance_id, id);
        assert!(inv.equipment(&id).is_none());
        assert!(inv.remove_equipment(&id).is_none());
    }
}

use serde::{Deserialize, Serialize};

use crate::items::types::{EquipSlot, EquipmentInstance, Rarity};
use crate::materials::{MaterialKind, Quality};

/// Crafting recipe for one equipment slot: a base material and a secondary
/// material, each with a cost count. Exactly one recipe exists per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub slot: EquipSlot,
    pub base: MaterialKind,
    pub base_cost: u32,
    pub secondary: MaterialKind,
    pub secondary_cost: u32,
}

static RECIPES: [Recipe; 6] = [
    Recipe {
        slot: EquipSlot::Head,
        base: MaterialKind::Hide,
        base_cost: 3,
        secondary: MaterialKind::Fiber,
        secondary_cost: 2,
    },
    Recipe {
        slot: EquipSlot::Body,
        base: MaterialKind::Hide,
        base_cost: 5,
        secondary: MaterialKind::Iron,
        secondary_cost: 3,
    },
    Recipe {
        slot: EquipSlot::Legs,
        base: MaterialKind::Fiber,
        base_cost: 4,
        secondary: MaterialKind::Hide,
        secondary_cost: 2,
    },
    Recipe {
        slot: EquipSlot::Feet,
        base: MaterialKind::Hide,
        base_cost: 3,
        secondary: MaterialKind::Bone,
        secondary_cost: 2,
    },
    Recipe {
        slot: EquipSlot::Weapon,
        base: MaterialKind::Iron,
        base_cost: 5,
        secondary: MaterialKind::Timber,
        secondary_cost: 3,
    },
    Recipe {
        slot: EquipSlot::Accessory,
        base: MaterialKind::Crystal,
        base_cost: 3,
        secondary: MaterialKind::Bone,
        secondary_cost: 2,
    },
];

/// Recipe lookup is total over the slot enum.
pub fn recipe_for(slot: EquipSlot) -> &'static Recipe {
    match slot {
        EquipSlot::Head => &RECIPES[0],
        EquipSlot::Body => &RECIPES[1],
        EquipSlot::Legs => &RECIPES[2],
        EquipSlot::Feet => &RECIPES[3],
        EquipSlot::Weapon => &RECIPES[4],
        EquipSlot::Accessory => &RECIPES[5],
    }
}

/// The qualities the player picked for a recipe's two material inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSelection {
    pub base_quality: Quality,
    pub secondary_quality: Quality,
}

/// Rarity probabilities (percent) by combined material quality, in rarity
/// order Common..Mythic. Each row sums to 100; Mythic is never craftable.
pub const RARITY_WEIGHTS: [[f64; 6]; 5] = [
    [50.0, 30.0, 15.0, 4.0, 1.0, 0.0],  // Normal
    [30.0, 40.0, 20.0, 8.0, 2.0, 0.0],  // Good
    [15.0, 30.0, 35.0, 15.0, 5.0, 0.0], // Fine
    [5.0, 15.0, 30.0, 35.0, 15.0, 0.0], // Rare
    [0.0, 5.0, 20.0, 35.0, 40.0, 0.0],  // Legendary
];

/// Probability simplex over the six rarities for one quality tier.
pub fn distribution_for(quality: Quality) -> [f64; 6] {
    let weights = RARITY_WEIGHTS[quality.index()];
    let mut distribution = [0.0; 6];
    for (slot, weight) in distribution.iter_mut().zip(weights) {
        *slot = weight / 100.0;
    }
    distribution
}

/// Result of a successful craft.
#[derive(Debug, Clone, PartialEq)]
pub struct CraftOutcome {
    pub equipment: EquipmentInstance,
    pub rarity: Rarity,
    /// The simplex the roll was drawn from, for display.
    pub distribution: [f64; 6],
    pub message: String,
}

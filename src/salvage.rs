//! Salvage: break equipment back down into a deterministic material reward.
//!
//! The reward is a pure function of (category, rarity). This module never
//! touches the inventory; the caller removes the item and credits the
//! returned materials.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::items::types::{ItemCategory, Rarity};
use crate::materials::{MaterialId, MaterialKind, Quality};

/// Salvage reward as shown to the player before confirming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalvagePreview {
    pub material: MaterialId,
    pub quantity: u32,
    pub material_name: String,
    pub rarity_label: &'static str,
    pub mythic: bool,
    pub message: String,
}

/// The reward to credit once the item is destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalvageReward {
    pub material: MaterialId,
    pub quantity: u32,
}

/// Material family each equipment family breaks down into.
fn material_for(category: ItemCategory) -> Option<MaterialKind> {
    match category {
        ItemCategory::Weapon => Some(MaterialKind::Iron),
        ItemCategory::Armor => Some(MaterialKind::Hide),
        ItemCategory::Accessory => Some(MaterialKind::Crystal),
        ItemCategory::Material | ItemCategory::Consumable => None,
    }
}

/// Reward quality and count by rarity. Higher tiers return better and more
/// material.
fn yield_for(rarity: Rarity) -> (Quality, u32) {
    match rarity {
        Rarity::Common => (Quality::Normal, 1),
        Rarity::Uncommon => (Quality::Normal, 2),
        Rarity::Rare => (Quality::Good, 2),
        Rarity::Epic => (Quality::Fine, 3),
        Rarity::Legendary => (Quality::Rare, 4),
        Rarity::Mythic => (Quality::Legendary, 5),
    }
}

/// Look up the reward for salvaging an item with the given name.
pub fn preview(
    category: ItemCategory,
    rarity: Rarity,
    name: &str,
) -> Result<SalvagePreview, CoreError> {
    let reward = salvage(category, rarity)?;
    let material_name = reward.material.display_name();
    Ok(SalvagePreview {
        message: format!(
            "Salvaging {} yields {}x {}",
            name, reward.quantity, material_name
        ),
        material: reward.material,
        quantity: reward.quantity,
        material_name,
        rarity_label: rarity.name(),
        mythic: rarity == Rarity::Mythic,
    })
}

/// The reward itself. Fails for non-equipment categories.
pub fn salvage(category: ItemCategory, rarity: Rarity) -> Result<SalvageReward, CoreError> {
    let kind = material_for(category).ok_or(CoreError::NotSalvageable(category))?;
    let (quality, quantity) = yield_for(rarity);
    Ok(SalvageReward {
        material: MaterialId::new(kind, quality),
        quantity,
    })
}

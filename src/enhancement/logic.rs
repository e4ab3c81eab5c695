use rand::Rng;

use super::types::{level_config, total_bonus, EnhanceOutcome, EnhancePreview};
use crate::core::constants::{ENHANCE_STONE_ID, PROTECTION_CHARM_ID};
use crate::error::CoreError;
use crate::inventory::Inventory;
use crate::items::types::{EquipmentInstance, Item};
use crate::player::Player;

/// Preview the next enhancement attempt for a piece of gear.
pub fn preview(
    gear: &EquipmentInstance,
    player: &Player,
    inventory: &Inventory,
) -> Result<EnhancePreview, CoreError> {
    let config = level_config(gear.enhance_level).ok_or(CoreError::MaxLevelReached)?;
    let target_level = gear.enhance_level + 1;
    Ok(EnhancePreview {
        current_level: gear.enhance_level,
        target_level,
        success_rate: config.success_rate,
        stone_cost: config.stone_cost,
        gold_cost: config.gold_cost,
        can_afford_gold: player.gold >= config.gold_cost,
        can_afford_stones: inventory.has(ENHANCE_STONE_ID, config.stone_cost),
        downgrade_on_fail: config.downgrade_on_fail,
        before: gear.stats.sum(&total_bonus(gear.enhance_level)),
        after: gear.stats.sum(&total_bonus(target_level)),
    })
}

/// Preview for an arbitrary inventory entry; stacks are not enhanceable.
pub fn preview_item(
    item: &Item,
    player: &Player,
    inventory: &Inventory,
) -> Result<EnhancePreview, CoreError> {
    match item {
        Item::Gear(gear) => preview(gear, player, inventory),
        Item::Stack { .. } => Err(CoreError::NotEnhanceable),
    }
}

/// Run one enhancement attempt.
///
/// All cost checks precede all deductions; a rejected attempt mutates
/// nothing. On a valid attempt gold, stones and the optional protection
/// charm are consumed whatever the roll says, then a single draw decides
/// between level-up, a held failure, and a one-level downgrade.
pub fn enhance(
    gear: &mut EquipmentInstance,
    use_protection: bool,
    player: &mut Player,
    inventory: &mut Inventory,
    rng: &mut impl Rng,
) -> Result<EnhanceOutcome, CoreError> {
    let config = level_config(gear.enhance_level).ok_or(CoreError::MaxLevelReached)?;

    if player.gold < config.gold_cost {
        return Err(CoreError::InsufficientGold {
            have: player.gold,
            need: config.gold_cost,
        });
    }
    let stones = inventory.quantity(ENHANCE_STONE_ID);
    if stones < config.stone_cost {
        return Err(CoreError::InsufficientMaterial {
            id: ENHANCE_STONE_ID.to_string(),
            have: stones,
            need: config.stone_cost,
        });
    }
    if use_protection && !inventory.has(PROTECTION_CHARM_ID, 1) {
        return Err(CoreError::InsufficientProtection);
    }

    player.spend_gold(config.gold_cost)?;
    inventory.remove(ENHANCE_STONE_ID, config.stone_cost)?;
    if use_protection {
        inventory.remove(PROTECTION_CHARM_ID, 1)?;
    }

    let outcome = if rng.gen::<f64>() < config.success_rate {
        gear.enhance_level += 1;
        EnhanceOutcome::Success {
            new_level: gear.enhance_level,
            message: format!("{} reached +{}", gear.name, gear.enhance_level),
        }
    } else if config.downgrade_on_fail && !use_protection {
        gear.enhance_level = gear.enhance_level.saturating_sub(1);
        EnhanceOutcome::FailureDowngrade {
            new_level: gear.enhance_level,
            message: format!("{} slipped to +{}", gear.name, gear.enhance_level),
        }
    } else {
        EnhanceOutcome::Failure {
            level: gear.enhance_level,
            protected: use_protection,
            message: format!("{} held at +{}", gear.name, gear.enhance_level),
        }
    };
    log::debug!("enhance {}: {:?}", gear.instance_id, outcome);
    Ok(outcome)
}

/// Attempt for an arbitrary inventory entry; stacks are not enhanceable.
pub fn enhance_item(
    item: &mut Item,
    use_protection: bool,
    player: &mut Player,
    inventory: &mut Inventory,
    rng: &mut impl Rng,
) -> Result<EnhanceOutcome, CoreError> {
    match item {
        Item::Gear(gear) => enhance(gear, use_protection, player, inventory, rng),
        Item::Stack { .. } => Err(CoreError::NotEnhanceable),
    }
}

use rand::Rng;

use super::types::{
    is_maxed, max_spirit_gate, milestone_index, progress_threshold, spirit_cost, stamina_cost,
    SublimeOutcome,
};
use crate::core::constants::{SUBLIME_PROGRESS_MAX, SUBLIME_PROGRESS_MIN};
use crate::error::CoreError;
use crate::items::types::{EquipmentInstance, Item, ItemCategory, StatBlock};
use crate::player::Player;

/// Run one sublimation attempt on a piece of gear.
///
/// Costs scale with the current level and double when the next level is a
/// milestone, which additionally gates on the player's max spirit. All
/// checks precede all deductions. The attempt banks a random progress
/// increment; clearing the level's threshold levels the item up, and at a
/// milestone also promotes its rarity one step.
pub fn sublimate(
    gear: &mut EquipmentInstance,
    player: &mut Player,
    rng: &mut impl Rng,
) -> Result<SublimeOutcome, CoreError> {
    if is_maxed(gear.sublime_level) {
        return Err(CoreError::AlreadyMaxed);
    }

    let next_level = gear.sublime_level + 1;
    let milestone = milestone_index(next_level);
    let mut spirit = spirit_cost(gear.sublime_level);
    let mut stamina = stamina_cost(gear.sublime_level);
    if let Some(index) = milestone {
        spirit *= 2;
        stamina *= 2;
        let gate = max_spirit_gate(index);
        if player.max_spirit < gate {
            return Err(CoreError::InsufficientMaxSpirit {
                have: player.max_spirit,
                need: gate,
            });
        }
    }
    if player.spirit < spirit {
        return Err(CoreError::InsufficientSpirit {
            have: player.spirit,
            need: spirit,
        });
    }
    if player.stamina < stamina {
        return Err(CoreError::InsufficientStamina {
            have: player.stamina,
            need: stamina,
        });
    }

    player.spend_spirit(spirit)?;
    player.spend_stamina(stamina)?;

    let gained = rng.gen_range(SUBLIME_PROGRESS_MIN..=SUBLIME_PROGRESS_MAX);
    gear.sublime_progress += gained;
    let threshold = progress_threshold(gear.sublime_level);

    if gear.sublime_progress < threshold {
        return Ok(SublimeOutcome::Progress {
            gained,
            progress: gear.sublime_progress,
            threshold,
            message: format!(
                "{}: {}/{} toward level {}",
                gear.name, gear.sublime_progress, threshold, next_level
            ),
        });
    }

    gear.sublime_level = next_level;
    gear.sublime_progress = 0;

    let promoted = if milestone.is_some() {
        let before = gear.rarity;
        gear.rarity = gear.rarity.promoted();
        apply_milestone_bonus(gear);
        if gear.rarity != before {
            log::info!("{} ascended to {}", gear.name, gear.rarity.name());
            Some(gear.rarity)
        } else {
            None
        }
    } else {
        apply_level_bonus(gear);
        None
    };

    let message = match promoted {
        Some(rarity) => format!(
            "{} reached sublimation {} and became {}",
            gear.name,
            next_level,
            rarity.name()
        ),
        None => format!("{} reached sublimation {}", gear.name, next_level),
    };
    Ok(SublimeOutcome::LevelUp {
        new_level: next_level,
        promoted,
        message,
    })
}

/// Attempt for an arbitrary inventory entry; only gear can be sublimated.
pub fn sublimate_item(
    item: &mut Item,
    player: &mut Player,
    rng: &mut impl Rng,
) -> Result<SublimeOutcome, CoreError> {
    match item {
        Item::Gear(gear) => sublimate(gear, player, rng),
        Item::Stack { .. } => Err(CoreError::WrongItemType),
    }
}

/// Flat per-level bonus, by equipment family.
fn apply_level_bonus(gear: &mut EquipmentInstance) {
    let delta = match gear.category() {
        ItemCategory::Weapon => StatBlock {
            attack: 3,
            hit: 1,
            ..StatBlock::zero()
        },
        ItemCategory::Armor => StatBlock {
            defense: 2,
            hp: 15,
            ..StatBlock::zero()
        },
        _ => StatBlock {
            speed: 1,
            dodge: 1,
            crit: 1,
            ..StatBlock::zero()
        },
    };
    gear.stats.add(&delta);
}

/// Milestone bonus: scale the main stats by the family multiplier, then add
/// a flat chunk on top.
fn apply_milestone_bonus(gear: &mut EquipmentInstance) {
    let (multiplier, flat) = match gear.category() {
        ItemCategory::Weapon => (
            1.5,
            StatBlock {
                attack: 5,
                crit_damage: 5,
                ..StatBlock::zero()
            },
        ),
        ItemCategory::Armor => (
            1.4,
            StatBlock {
                defense: 4,
                hp: 30,
                ..StatBlock::zero()
            },
        ),
        _ => (
            1.3,
            StatBlock {
                speed: 2,
                crit: 2,
                ..StatBlock::zero()
            },
        ),
    };
    gear.stats.attack = scale(gear.stats.attack, multiplier);
    gear.stats.defense = scale(gear.stats.defense, multiplier);
    gear.stats.hp = scale(gear.stats.hp, multiplier);
    gear.stats.add(&flat);
}

fn scale(value: i32, multiplier: f64) -> i32 {
    (f64::from(value) * multiplier).round() as i32
}

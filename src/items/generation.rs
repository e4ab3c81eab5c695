//! Equipment template generator.
//!
//! Stat generation is total over slot × rarity: every combination yields an
//! instance, so crafting can rely on generation never failing once materials
//! are spent.

use rand::Rng;

use super::types::{EquipSlot, EquipmentInstance, Rarity, StatBlock};

/// Generate a fresh piece of equipment for the given slot and rarity.
pub fn generate_equipment(slot: EquipSlot, rarity: Rarity, rng: &mut impl Rng) -> EquipmentInstance {
    let stats = generate_stats(slot, rarity, rng);
    let name = display_name(slot, rarity, rng);
    EquipmentInstance::new(slot, rarity, name, stats)
}

/// Rarity multiplier applied to every base stat.
fn rarity_multiplier(rarity: Rarity) -> f64 {
    match rarity {
        Rarity::Common => 1.0,
        Rarity::Uncommon => 1.4,
        Rarity::Rare => 1.9,
        Rarity::Epic => 2.6,
        Rarity::Legendary => 3.5,
        Rarity::Mythic => 5.0,
    }
}

/// Base stats at Common for each slot.
fn base_stats(slot: EquipSlot) -> StatBlock {
    match slot {
        EquipSlot::Weapon => StatBlock {
            attack: 8,
            hit: 3,
            crit: 2,
            crit_damage: 5,
            ..StatBlock::zero()
        },
        EquipSlot::Head => StatBlock {
            defense: 3,
            hp: 10,
            hit: 1,
            ..StatBlock::zero()
        },
        EquipSlot::Body => StatBlock {
            defense: 6,
            hp: 20,
            ..StatBlock::zero()
        },
        EquipSlot::Legs => StatBlock {
            defense: 4,
            hp: 10,
            speed: 1,
            ..StatBlock::zero()
        },
        EquipSlot::Feet => StatBlock {
            defense: 2,
            speed: 3,
            dodge: 2,
            ..StatBlock::zero()
        },
        EquipSlot::Accessory => StatBlock {
            attack: 2,
            defense: 2,
            speed: 1,
            crit: 2,
            ..StatBlock::zero()
        },
    }
}

fn generate_stats(slot: EquipSlot, rarity: Rarity, rng: &mut impl Rng) -> StatBlock {
    let base = base_stats(slot);
    let multiplier = rarity_multiplier(rarity);
    StatBlock {
        attack: roll_stat(base.attack, multiplier, rng),
        defense: roll_stat(base.defense, multiplier, rng),
        hp: roll_stat(base.hp, multiplier, rng),
        speed: roll_stat(base.speed, multiplier, rng),
        hit: roll_stat(base.hit, multiplier, rng),
        dodge: roll_stat(base.dodge, multiplier, rng),
        crit: roll_stat(base.crit, multiplier, rng),
        crit_damage: roll_stat(base.crit_damage, multiplier, rng),
    }
}

/// Scale a base stat and add a small upward variance. Zero stays zero.
fn roll_stat(base: i32, multiplier: f64, rng: &mut impl Rng) -> i32 {
    if base == 0 {
        return 0;
    }
    let scaled = (base as f64 * multiplier).round() as i32;
    let variance = (scaled / 5).max(1);
    scaled + rng.gen_range(0..=variance)
}

fn display_name(slot: EquipSlot, rarity: Rarity, rng: &mut impl Rng) -> String {
    let prefixes: &[&str] = match rarity {
        Rarity::Common => &["Worn", "Patched", "Scavenged"],
        Rarity::Uncommon => &["Sturdy", "Tempered", "Reliable"],
        Rarity::Rare => &["Engraved", "Polished", "Veteran's"],
        Rarity::Epic => &["Stormwrought", "Gleaming", "Conductor's"],
        Rarity::Legendary => &["Ancient", "Radiant", "Trailblazer's"],
        Rarity::Mythic => &["Mythic", "Worldforged"],
    };
    let noun = match slot {
        EquipSlot::Head => "Cap",
        EquipSlot::Body => "Jacket",
        EquipSlot::Legs => "Greaves",
        EquipSlot::Feet => "Boots",
        EquipSlot::Weapon => "Machete",
        EquipSlot::Accessory => "Talisman",
    };
    let prefix = prefixes[rng.gen_range(0..prefixes.len())];
    format!("{prefix} {noun}")
}

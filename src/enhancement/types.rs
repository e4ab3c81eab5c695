use serde::{Deserialize, Serialize};

use crate::items::types::{EquipmentInstance, StatBlock};

/// Highest reachable enhancement level; the config table has one entry per
/// level below it.
pub const MAX_ENHANCE_LEVEL: u8 = 10;

/// Per-level enhancement config, indexed by the item's current level.
/// No entry means the item is already at the cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnhanceLevel {
    pub success_rate: f64,
    pub stone_cost: u32,
    pub gold_cost: u64,
    /// On failure the item drops one level unless a protection charm was
    /// spent on the attempt.
    pub downgrade_on_fail: bool,
    /// Stat deltas granted when the attempt reaches the next level.
    pub bonus: StatBlock,
}

const fn bonus(attack: i32, defense: i32, hp: i32) -> StatBlock {
    StatBlock {
        attack,
        defense,
        hp,
        speed: 0,
        hit: 0,
        dodge: 0,
        crit: 0,
        crit_damage: 0,
    }
}

static LEVELS: [EnhanceLevel; MAX_ENHANCE_LEVEL as usize] = [
    EnhanceLevel { success_rate: 1.00, stone_cost: 1, gold_cost: 100, downgrade_on_fail: false, bonus: bonus(1, 1, 5) },
    EnhanceLevel { success_rate: 1.00, stone_cost: 1, gold_cost: 150, downgrade_on_fail: false, bonus: bonus(1, 1, 5) },
    EnhanceLevel { success_rate: 0.90, stone_cost: 2, gold_cost: 220, downgrade_on_fail: false, bonus: bonus(2, 1, 8) },
    EnhanceLevel { success_rate: 0.80, stone_cost: 2, gold_cost: 320, downgrade_on_fail: false, bonus: bonus(2, 2, 10) },
    EnhanceLevel { success_rate: 0.70, stone_cost: 3, gold_cost: 450, downgrade_on_fail: true, bonus: bonus(3, 2, 12) },
    EnhanceLevel { success_rate: 0.60, stone_cost: 3, gold_cost: 650, downgrade_on_fail: true, bonus: bonus(3, 3, 15) },
    EnhanceLevel { success_rate: 0.50, stone_cost: 4, gold_cost: 900, downgrade_on_fail: true, bonus: bonus(4, 3, 18) },
    EnhanceLevel { success_rate: 0.35, stone_cost: 5, gold_cost: 1300, downgrade_on_fail: true, bonus: bonus(5, 4, 22) },
    EnhanceLevel { success_rate: 0.20, stone_cost: 6, gold_cost: 1900, downgrade_on_fail: true, bonus: bonus(6, 5, 26) },
    EnhanceLevel { success_rate: 0.10, stone_cost: 8, gold_cost: 2800, downgrade_on_fail: true, bonus: bonus(8, 6, 32) },
];

/// Config for enhancing from `current_level` to the next one.
pub fn level_config(current_level: u8) -> Option<&'static EnhanceLevel> {
    LEVELS.get(current_level as usize)
}

/// Cumulative stat bonus granted by all levels up to and including `level`.
pub fn total_bonus(level: u8) -> StatBlock {
    let mut total = StatBlock::zero();
    for config in LEVELS.iter().take(level as usize) {
        total.add(&config.bonus);
    }
    total
}

/// Base stats plus the enhancement bonus for the item's current level.
pub fn effective_stats(gear: &EquipmentInstance) -> StatBlock {
    gear.stats.sum(&total_bonus(gear.enhance_level))
}

/// Everything the caller needs to show before an attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancePreview {
    pub current_level: u8,
    pub target_level: u8,
    pub success_rate: f64,
    pub stone_cost: u32,
    pub gold_cost: u64,
    pub can_afford_gold: bool,
    pub can_afford_stones: bool,
    pub downgrade_on_fail: bool,
    pub before: StatBlock,
    pub after: StatBlock,
}

/// Outcome of a paid enhancement attempt. Costs are spent on every branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnhanceOutcome {
    Success {
        new_level: u8,
        message: String,
    },
    /// Level held, either because this level does not downgrade or because a
    /// protection charm absorbed the failure.
    Failure {
        level: u8,
        protected: bool,
        message: String,
    },
    FailureDowngrade {
        new_level: u8,
        message: String,
    },
}

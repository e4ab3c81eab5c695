use serde::{Deserialize, Serialize};

use crate::core::constants::{MAX_SUBLIME_LEVEL, SUBLIME_MILESTONES};
use crate::items::types::Rarity;

/// Position of `level` in the milestone list, if it is one. Milestone levels
/// promote the item's rarity when reached.
pub fn milestone_index(level: u8) -> Option<usize> {
    SUBLIME_MILESTONES.iter().position(|&m| m == level)
}

/// Spirit cost for an attempt at the item's current level.
pub fn spirit_cost(current_level: u8) -> u32 {
    (u32::from(current_level) + 1) * 10
}

/// Stamina cost for an attempt at the item's current level.
pub fn stamina_cost(current_level: u8) -> u32 {
    (u32::from(current_level) + 1) * 5
}

/// Max-spirit gate for a milestone attempt.
pub fn max_spirit_gate(milestone: usize) -> u32 {
    30 + milestone as u32 * 20
}

/// Progress needed to clear the item's current level.
pub fn progress_threshold(current_level: u8) -> u32 {
    (u32::from(current_level) + 1) * 20
}

pub fn is_maxed(level: u8) -> bool {
    level >= MAX_SUBLIME_LEVEL
}

/// Outcome of a paid sublimation attempt. Spirit and stamina buy progress,
/// not a guaranteed level, so `Progress` is still a success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SublimeOutcome {
    Progress {
        gained: u32,
        progress: u32,
        threshold: u32,
        message: String,
    },
    LevelUp {
        new_level: u8,
        /// Set when the level was a milestone and the rarity moved up.
        promoted: Option<Rarity>,
        message: String,
    },
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Quest lifecycle. Status only moves forward; the single exception is that
/// daily quests get their condition progress zeroed at day rollover while
/// staying Active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestStatus {
    Locked,
    Active,
    Completed,
    Rewarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestKind {
    Normal,
    Daily,
}

/// What a condition counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionKind {
    Kill,
    Collect,
    Craft,
    Enhance,
    Explore,
}

/// Target id matching any concrete target of the condition's kind.
pub const ANY_TARGET: &str = "any";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub kind: ConditionKind,
    pub target: String,
    pub required: u32,
    pub current: u32,
}

impl Condition {
    pub fn new(kind: ConditionKind, target: &str, required: u32) -> Self {
        Self {
            kind,
            target: target.to_string(),
            required,
            current: 0,
        }
    }

    pub fn is_met(&self) -> bool {
        self.current >= self.required
    }

    pub fn matches(&self, kind: ConditionKind, target: &str) -> bool {
        self.kind == kind && (self.target == ANY_TARGET || self.target == target)
    }
}

/// Reward bundle returned to the caller on claim; crediting the player and
/// inventory is the caller's job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuestReward {
    pub exp: u64,
    pub gold: u64,
    /// Consumable item ids and counts.
    pub items: Vec<(String, u32)>,
    /// Material keys to counts.
    pub materials: HashMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub status: QuestStatus,
    pub kind: QuestKind,
    pub conditions: Vec<Condition>,
    pub reward: QuestReward,
    /// Quests that must be Completed or Rewarded before this one activates.
    pub prerequisites: Vec<String>,
}

impl Quest {
    pub fn all_conditions_met(&self) -> bool {
        self.conditions.iter().all(Condition::is_met)
    }
}

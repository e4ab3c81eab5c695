//! Domain errors shared by every engine in the core.
//!
//! Expected gameplay failures are `Err` values, never panics. Every operation
//! checks all of its requirements before mutating anything, so a returned
//! error always means "nothing changed".

use thiserror::Error;

use crate::items::types::ItemCategory;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    // ── Validation ──────────────────────────────────────────────
    #[error("item {0:?} not found in inventory")]
    ItemNotFound(String),

    #[error("only gear can be enhanced")]
    NotEnhanceable,

    #[error("only gear can be sublimated")]
    WrongItemType,

    #[error("{0:?} items cannot be salvaged")]
    NotSalvageable(ItemCategory),

    #[error("unknown material kind in key {0:?}")]
    UnknownMaterial(String),

    #[error("invalid quality in key {0:?}")]
    InvalidQuality(String),

    #[error("missing configuration for {0}")]
    MissingConfiguration(String),

    // ── Resource shortfalls ─────────────────────────────────────
    #[error("not enough {id}: have {have}, need {need}")]
    InsufficientMaterial { id: String, have: u32, need: u32 },

    #[error("not enough gold: have {have}, need {need}")]
    InsufficientGold { have: u64, need: u64 },

    #[error("not enough spirit: have {have}, need {need}")]
    InsufficientSpirit { have: u32, need: u32 },

    #[error("not enough stamina: have {have}, need {need}")]
    InsufficientStamina { have: u32, need: u32 },

    #[error("max spirit too low: have {have}, need {need}")]
    InsufficientMaxSpirit { have: u32, need: u32 },

    #[error("no protection charm available")]
    InsufficientProtection,

    // ── State conflicts ─────────────────────────────────────────
    #[error("enhancement level is already at the maximum")]
    MaxLevelReached,

    #[error("sublimation level is already at the maximum")]
    AlreadyMaxed,

    #[error("quest {0:?} not found")]
    QuestNotFound(String),

    #[error("quest {0:?} is not ready to claim")]
    NotCompletable(String),

    #[error("skill {0:?} has not been unlocked")]
    NotUnlocked(String),

    #[error("skill {0:?} is already learned")]
    AlreadyLearned(String),

    #[error("all {0} active skill slots are in use")]
    ActiveSlotsFull(usize),
}

//! Skill acquisition with capped active slots, chained unlocks and per-turn
//! cooldowns.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{starting_available, template};
pub use logic::SkillBook;
pub use types::{Scaling, Skill, SkillEffects, SkillKind, SkillTemplate};

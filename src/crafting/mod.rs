//! Crafting: recipe lookup, material checks and the weighted rarity roll.

pub mod logic;
pub mod types;

pub use logic::{can_craft, combined_quality, craft, preview_distribution, roll_rarity};
pub use types::{distribution_for, recipe_for, CraftOutcome, MaterialSelection, Recipe};

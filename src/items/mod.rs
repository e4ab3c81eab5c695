//! Equipment identity, stats and the template generator.

pub mod generation;
pub mod types;

pub use generation::generate_equipment;
pub use types::{EquipSlot, EquipmentInstance, Item, ItemCategory, Rarity, StatBlock};

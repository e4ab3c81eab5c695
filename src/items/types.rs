use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::materials::MaterialId;

/// Equipment slots a crafted piece can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Head,
    Body,
    Legs,
    Feet,
    Weapon,
    Accessory,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; 6] = [
        EquipSlot::Head,
        EquipSlot::Body,
        EquipSlot::Legs,
        EquipSlot::Feet,
        EquipSlot::Weapon,
        EquipSlot::Accessory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Head => "Head",
            EquipSlot::Body => "Body",
            EquipSlot::Legs => "Legs",
            EquipSlot::Feet => "Feet",
            EquipSlot::Weapon => "Weapon",
            EquipSlot::Accessory => "Accessory",
        }
    }

    pub fn category(&self) -> ItemCategory {
        match self {
            EquipSlot::Weapon => ItemCategory::Weapon,
            EquipSlot::Accessory => ItemCategory::Accessory,
            EquipSlot::Head | EquipSlot::Body | EquipSlot::Legs | EquipSlot::Feet => {
                ItemCategory::Armor
            }
        }
    }
}

/// Equipment rarity, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
}

impl Rarity {
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }

    /// One step up, capped at Mythic.
    pub fn promoted(&self) -> Rarity {
        Rarity::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(Rarity::Mythic)
    }
}

/// Coarse item family used by enhancement, sublimation and salvage gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Accessory,
    Material,
    Consumable,
}

impl ItemCategory {
    pub fn is_gear(&self) -> bool {
        matches!(
            self,
            ItemCategory::Weapon | ItemCategory::Armor | ItemCategory::Accessory
        )
    }
}

/// Flat combat stats carried by a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatBlock {
    pub attack: i32,
    pub defense: i32,
    pub hp: i32,
    pub speed: i32,
    pub hit: i32,
    pub dodge: i32,
    pub crit: i32,
    pub crit_damage: i32,
}

impl StatBlock {
    pub const fn zero() -> StatBlock {
        StatBlock {
            attack: 0,
            defense: 0,
            hp: 0,
            speed: 0,
            hit: 0,
            dodge: 0,
            crit: 0,
            crit_damage: 0,
        }
    }

    pub fn add(&mut self, other: &StatBlock) {
        self.attack += other.attack;
        self.defense += other.defense;
        self.hp += other.hp;
        self.speed += other.speed;
        self.hit += other.hit;
        self.dodge += other.dodge;
        self.crit += other.crit;
        self.crit_damage += other.crit_damage;
    }

    pub fn sum(mut self, other: &StatBlock) -> StatBlock {
        self.add(other);
        self
    }
}

/// A single piece of equipment owned by the player.
///
/// Created by crafting or the template generator, destroyed by salvage.
/// `stats` is the base block; sublimation mutates it directly, while
/// enhancement bonuses are derived from `enhance_level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentInstance {
    /// Template identity, e.g. `"weapon_rare"`.
    pub id: String,
    /// Unique per instance.
    pub instance_id: String,
    pub slot: EquipSlot,
    pub rarity: Rarity,
    pub name: String,
    pub stats: StatBlock,
    pub enhance_level: u8,
    pub sublime_level: u8,
    pub sublime_progress: u32,
}

impl EquipmentInstance {
    pub fn new(slot: EquipSlot, rarity: Rarity, name: String, stats: StatBlock) -> Self {
        Self {
            id: format!("{}_{}", slot.name().to_lowercase(), rarity.name().to_lowercase()),
            instance_id: Uuid::new_v4().to_string(),
            slot,
            rarity,
            name,
            stats,
            enhance_level: 0,
            sublime_level: 0,
            sublime_progress: 0,
        }
    }

    pub fn category(&self) -> ItemCategory {
        self.slot.category()
    }
}

/// An inventory entry: either a counted stack or a piece of gear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Stack { id: String, quantity: u32 },
    Gear(EquipmentInstance),
}

impl Item {
    pub fn category(&self) -> ItemCategory {
        match self {
            Item::Gear(gear) => gear.category(),
            Item::Stack { id, .. } => {
                if MaterialId::parse(id).is_ok() {
                    ItemCategory::Material
                } else {
                    ItemCategory::Consumable
                }
            }
        }
    }
}

//! Crafting materials: kind and quality identity, plus the string keys used
//! for inventory lookup.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The six gatherable material families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialKind {
    Timber,
    Iron,
    Hide,
    Fiber,
    Crystal,
    Bone,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 6] = [
        MaterialKind::Timber,
        MaterialKind::Iron,
        MaterialKind::Hide,
        MaterialKind::Fiber,
        MaterialKind::Crystal,
        MaterialKind::Bone,
    ];

    /// Stable lowercase key used in inventory ids.
    pub fn key(&self) -> &'static str {
        match self {
            MaterialKind::Timber => "timber",
            MaterialKind::Iron => "iron",
            MaterialKind::Hide => "hide",
            MaterialKind::Fiber => "fiber",
            MaterialKind::Crystal => "crystal",
            MaterialKind::Bone => "bone",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MaterialKind::Timber => "Timber",
            MaterialKind::Iron => "Iron",
            MaterialKind::Hide => "Hide",
            MaterialKind::Fiber => "Fiber",
            MaterialKind::Crystal => "Crystal",
            MaterialKind::Bone => "Bone",
        }
    }

    fn from_key(key: &str) -> Option<MaterialKind> {
        MaterialKind::ALL.into_iter().find(|k| k.key() == key)
    }
}

/// Material quality, a total order used in weighted-average computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quality {
    Normal = 0,
    Good = 1,
    Fine = 2,
    Rare = 3,
    Legendary = 4,
}

impl Quality {
    pub const ALL: [Quality; 5] = [
        Quality::Normal,
        Quality::Good,
        Quality::Fine,
        Quality::Rare,
        Quality::Legendary,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Index back to a tier, clamped to Legendary.
    pub fn from_index(index: usize) -> Quality {
        Quality::ALL
            .get(index)
            .copied()
            .unwrap_or(Quality::Legendary)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Quality::Normal => "normal",
            Quality::Good => "good",
            Quality::Fine => "fine",
            Quality::Rare => "rare",
            Quality::Legendary => "legendary",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Quality::Normal => "Normal",
            Quality::Good => "Good",
            Quality::Fine => "Fine",
            Quality::Rare => "Rare",
            Quality::Legendary => "Legendary",
        }
    }

    fn from_key(key: &str) -> Option<Quality> {
        Quality::ALL.into_iter().find(|q| q.key() == key)
    }
}

/// A concrete material: kind plus quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId {
    pub kind: MaterialKind,
    pub quality: Quality,
}

impl MaterialId {
    pub fn new(kind: MaterialKind, quality: Quality) -> Self {
        Self { kind, quality }
    }

    /// Inventory key, e.g. `"iron_fine"`. `parse` reverses this losslessly.
    pub fn key(&self) -> String {
        format!("{}_{}", self.kind.key(), self.quality.key())
    }

    pub fn parse(key: &str) -> Result<MaterialId, CoreError> {
        let (kind_part, quality_part) = key
            .rsplit_once('_')
            .ok_or_else(|| CoreError::InvalidQuality(key.to_string()))?;
        let kind = MaterialKind::from_key(kind_part)
            .ok_or_else(|| CoreError::UnknownMaterial(key.to_string()))?;
        let quality = Quality::from_key(quality_part)
            .ok_or_else(|| CoreError::InvalidQuality(key.to_string()))?;
        Ok(MaterialId { kind, quality })
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.quality.name(), self.kind.name())
    }
}

//! The full simulation state, owned explicitly by whoever drives the core.
//!
//! Engines are free functions over the pieces held here; this aggregate only
//! wires together the couplings that cross module lines, like day rollover
//! fanning out into shop restock and daily-quest resets.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::clock::{ClockEvent, GameClock};
use crate::crafting::{self, CraftOutcome, MaterialSelection};
use crate::enhancement::{self, EnhanceOutcome};
use crate::error::CoreError;
use crate::inventory::Inventory;
use crate::items::types::EquipSlot;
use crate::locations::{date_label, LocationLog};
use crate::player::{Player, RecoveryReport};
use crate::quests::{starter_quests, QuestLog, QuestReward};
use crate::salvage::{self, SalvageReward};
use crate::shop::Shop;
use crate::skills::{starting_available, SkillBook};
use crate::sublimation::{self, SublimeOutcome};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub inventory: Inventory,
    pub quests: QuestLog,
    pub skills: SkillBook,
    pub shop: Shop,
    pub locations: LocationLog,
    pub clock: GameClock,
}

impl GameState {
    /// Fresh game with the starter quest set, starting skills and shop stock.
    pub fn new(now_ts: i64) -> Self {
        Self {
            player: Player::new(now_ts),
            inventory: Inventory::new(),
            quests: QuestLog::new(starter_quests()),
            skills: SkillBook::new(starting_available()),
            shop: Shop::default_stock(),
            locations: LocationLog::new(),
            clock: GameClock::new(),
        }
    }

    /// Advance game time and apply rollover effects: each crossed day
    /// restocks the shop and resets active daily quests exactly once.
    pub fn advance_time(&mut self, minutes: u64) -> Vec<ClockEvent> {
        let events = self.clock.advance(minutes);
        for event in &events {
            if let ClockEvent::NewDay { day } = event {
                self.shop.restock();
                self.quests.reset_daily();
                log::info!("daily reset applied for day {day}");
            }
        }
        events
    }

    /// Wall-clock recovery pass for the player pools.
    pub fn recover(&mut self, now_ts: i64) -> RecoveryReport {
        self.player.recover(now_ts)
    }

    /// Gate a location boss attempt to once per calendar day. Records the
    /// attempt when it is allowed.
    pub fn try_challenge_boss(&mut self, location_id: &str, now_ts: i64) -> bool {
        let date = date_label(now_ts);
        if !self.locations.can_challenge_boss(location_id, &date) {
            return false;
        }
        self.locations.record_boss_challenge(location_id, &date);
        true
    }

    // ── Equipment actions by instance id ────────────────────────

    pub fn craft_equipment(
        &mut self,
        slot: EquipSlot,
        selection: &MaterialSelection,
        rng: &mut impl Rng,
    ) -> Result<CraftOutcome, CoreError> {
        crafting::craft(slot, selection, &mut self.inventory, rng)
    }

    /// Enhance a piece of equipment from the inventory list.
    pub fn enhance_equipment(
        &mut self,
        instance_id: &str,
        use_protection: bool,
        rng: &mut impl Rng,
    ) -> Result<EnhanceOutcome, CoreError> {
        let index = self
            .inventory
            .equipment
            .iter()
            .position(|g| g.instance_id == instance_id)
            .ok_or_else(|| CoreError::ItemNotFound(instance_id.to_string()))?;
        // Lift the gear out so the attempt can spend stones from the same
        // inventory, then put it back in place.
        let mut gear = self.inventory.equipment.remove(index);
        let result = enhancement::enhance(
            &mut gear,
            use_protection,
            &mut self.player,
            &mut self.inventory,
            rng,
        );
        self.inventory.equipment.insert(index, gear);
        result
    }

    pub fn sublimate_equipment(
        &mut self,
        instance_id: &str,
        rng: &mut impl Rng,
    ) -> Result<SublimeOutcome, CoreError> {
        let gear = self
            .inventory
            .equipment_mut(instance_id)
            .ok_or_else(|| CoreError::ItemNotFound(instance_id.to_string()))?;
        sublimation::sublimate(gear, &mut self.player, rng)
    }

    /// Salvage a piece of equipment: destroy it and credit the material
    /// reward to the inventory.
    pub fn salvage_equipment(&mut self, instance_id: &str) -> Result<SalvageReward, CoreError> {
        let gear = self
            .inventory
            .equipment(instance_id)
            .ok_or_else(|| CoreError::ItemNotFound(instance_id.to_string()))?;
        let reward = salvage::salvage(gear.category(), gear.rarity)?;
        self.inventory.remove_equipment(instance_id);
        self.inventory.add(&reward.material.key(), reward.quantity);
        Ok(reward)
    }

    /// Claim a completed quest and credit its bundle to the player and
    /// inventory.
    pub fn claim_quest_reward(&mut self, quest_id: &str) -> Result<QuestReward, CoreError> {
        let reward = self.quests.claim_reward(quest_id)?;
        self.player.exp += reward.exp;
        self.player.gold += reward.gold;
        for (id, quantity) in &reward.items {
            self.inventory.add(id, *quantity);
        }
        for (id, quantity) in &reward.materials {
            self.inventory.add(id, *quantity);
        }
        Ok(reward)
    }
}

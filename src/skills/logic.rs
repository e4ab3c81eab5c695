use serde::{Deserialize, Serialize};

use super::data;
use super::types::{Skill, SkillKind};
use crate::core::constants::MAX_ACTIVE_SKILLS;
use crate::error::CoreError;

/// Learned and learnable skills.
///
/// Active skills occupy a capped set of battle slots; passives are uncapped.
/// Learning a skill appends its unlock chain to the available list, so the
/// graph opens up as the player invests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillBook {
    pub available: Vec<String>,
    pub active: Vec<Skill>,
    pub passive: Vec<Skill>,
}

impl SkillBook {
    pub fn new(available: Vec<String>) -> Self {
        Self {
            available,
            active: Vec::new(),
            passive: Vec::new(),
        }
    }

    pub fn is_learned(&self, id: &str) -> bool {
        self.active.iter().any(|s| s.id == id) || self.passive.iter().any(|s| s.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Skill> {
        self.active
            .iter_mut()
            .chain(self.passive.iter_mut())
            .find(|s| s.id == id)
    }

    /// Learn an available skill and open its unlock chain.
    pub fn learn(&mut self, id: &str) -> Result<(), CoreError> {
        if !self.available.iter().any(|a| a == id) {
            return Err(CoreError::NotUnlocked(id.to_string()));
        }
        if self.is_learned(id) {
            return Err(CoreError::AlreadyLearned(id.to_string()));
        }
        let template =
            data::template(id).ok_or_else(|| CoreError::MissingConfiguration(id.to_string()))?;
        if template.kind == SkillKind::Active && self.active.len() >= MAX_ACTIVE_SKILLS {
            return Err(CoreError::ActiveSlotsFull(MAX_ACTIVE_SKILLS));
        }

        let skill = Skill::from_template(template);
        log::info!("skill learned: {}", skill.name);
        match template.kind {
            SkillKind::Active => self.active.push(skill),
            SkillKind::Passive => self.passive.push(skill),
        }
        for unlocked in template.unlocks {
            if !self.available.iter().any(|a| a == unlocked) {
                log::debug!("skill now available: {unlocked}");
                self.available.push(unlocked.to_string());
            }
        }
        Ok(())
    }

    /// Turn end: tick every active skill's cooldown down, floored at zero.
    pub fn on_turn_end(&mut self) {
        for skill in &mut self.active {
            skill.current_cooldown = skill.current_cooldown.saturating_sub(1);
        }
    }

    pub fn can_use(&self, id: &str) -> bool {
        self.active
            .iter()
            .chain(self.passive.iter())
            .find(|s| s.id == id)
            .is_some_and(Skill::can_use)
    }

    /// Fire a skill. Returns false without side effects while the skill is
    /// cooling down or unknown; otherwise starts the cooldown and counts
    /// the use.
    pub fn use_skill(&mut self, id: &str) -> bool {
        let Some(skill) = self.find_mut(id) else {
            return false;
        };
        if !skill.can_use() {
            return false;
        }
        skill.current_cooldown = skill.max_cooldown;
        skill.use_count += 1;
        true
    }
}

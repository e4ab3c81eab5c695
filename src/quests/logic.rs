use serde::{Deserialize, Serialize};

use super::types::{ConditionKind, Quest, QuestKind, QuestReward, QuestStatus};
use crate::error::CoreError;

/// The player's quest collection and its state machine.
///
/// Locked quests activate once every prerequisite is Completed or Rewarded;
/// active quests complete once every condition is met; completed quests are
/// claimed for their reward. Unlocks cascade, so finishing one quest may
/// activate a chain behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestLog {
    pub quests: Vec<Quest>,
}

impl QuestLog {
    /// Build a log and immediately activate everything with no outstanding
    /// prerequisites.
    pub fn new(quests: Vec<Quest>) -> Self {
        let mut log = Self { quests };
        log.cascade_unlocks();
        log
    }

    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    fn prerequisites_met(&self, quest: &Quest) -> bool {
        quest.prerequisites.iter().all(|id| {
            self.get(id).is_some_and(|p| {
                matches!(p.status, QuestStatus::Completed | QuestStatus::Rewarded)
            })
        })
    }

    /// Activate every locked quest whose prerequisites are satisfied,
    /// repeating until nothing changes. Returns newly activated ids.
    pub fn cascade_unlocks(&mut self) -> Vec<String> {
        let mut activated = Vec::new();
        loop {
            let unlockable: Vec<usize> = self
                .quests
                .iter()
                .enumerate()
                .filter(|(_, q)| q.status == QuestStatus::Locked && self.prerequisites_met(q))
                .map(|(i, _)| i)
                .collect();
            if unlockable.is_empty() {
                return activated;
            }
            for index in unlockable {
                let quest = &mut self.quests[index];
                quest.status = QuestStatus::Active;
                log::info!("quest unlocked: {}", quest.title);
                activated.push(quest.id.clone());
            }
        }
    }

    /// Feed an event into every active quest. Conditions matching the kind
    /// and target (or the wildcard) gain `amount`; quests whose conditions
    /// are all met complete, and the unlock cascade runs afterwards.
    /// Returns the ids of quests completed by this call.
    pub fn update_progress(
        &mut self,
        kind: ConditionKind,
        target: &str,
        amount: u32,
    ) -> Vec<String> {
        let mut completed = Vec::new();
        for quest in &mut self.quests {
            if quest.status != QuestStatus::Active {
                continue;
            }
            let mut touched = false;
            for condition in &mut quest.conditions {
                if condition.matches(kind, target) {
                    condition.current = condition.current.saturating_add(amount);
                    touched = true;
                }
            }
            if touched && quest.all_conditions_met() {
                quest.status = QuestStatus::Completed;
                log::info!("quest completed: {}", quest.title);
                completed.push(quest.id.clone());
            }
        }
        if !completed.is_empty() {
            self.cascade_unlocks();
        }
        completed
    }

    /// Claim a completed quest. The returned bundle is credited by the
    /// caller; the quest moves to Rewarded, which also satisfies dependents.
    pub fn claim_reward(&mut self, id: &str) -> Result<QuestReward, CoreError> {
        let quest = self
            .quests
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| CoreError::QuestNotFound(id.to_string()))?;
        if quest.status != QuestStatus::Completed {
            return Err(CoreError::NotCompletable(id.to_string()));
        }
        quest.status = QuestStatus::Rewarded;
        let reward = quest.reward.clone();
        self.cascade_unlocks();
        Ok(reward)
    }

    /// Day rollover: zero the condition progress of active daily quests.
    /// Completed and rewarded dailies are left as they are; re-arming them
    /// for the new day is the caller's policy.
    pub fn reset_daily(&mut self) {
        for quest in &mut self.quests {
            if quest.kind == QuestKind::Daily && quest.status == QuestStatus::Active {
                for condition in &mut quest.conditions {
                    condition.current = 0;
                }
                log::debug!("daily quest reset: {}", quest.id);
            }
        }
    }
}

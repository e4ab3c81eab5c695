//! Player resource pool: spirit, stamina, hp, gold and the derived combat
//! totals, plus wall-clock recovery.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    BASE_MAX_HP, BASE_MAX_SPIRIT, BASE_MAX_STAMINA, RECOVERY_INTERVAL_SECONDS,
    SPIRIT_PER_INTERVAL, STAMINA_PER_INTERVAL, STARTING_GOLD,
};
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub hp: u32,
    pub max_hp: u32,
    pub spirit: u32,
    pub max_spirit: u32,
    pub stamina: u32,
    pub max_stamina: u32,
    pub exp: u64,
    pub gold: u64,
    pub total_attack: i32,
    pub total_defense: i32,
    pub total_agility: i32,
    /// Unix seconds of the last recovery credit. Advanced only by whole
    /// recovery intervals, never past `now`.
    pub last_recovery_ts: i64,
}

/// What a recovery pass actually credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecoveryReport {
    pub stamina_gained: u32,
    pub spirit_gained: u32,
    pub intervals: u32,
}

impl Player {
    pub fn new(now_ts: i64) -> Self {
        Self {
            hp: BASE_MAX_HP,
            max_hp: BASE_MAX_HP,
            spirit: BASE_MAX_SPIRIT,
            max_spirit: BASE_MAX_SPIRIT,
            stamina: BASE_MAX_STAMINA,
            max_stamina: BASE_MAX_STAMINA,
            exp: 0,
            gold: STARTING_GOLD,
            total_attack: 0,
            total_defense: 0,
            total_agility: 0,
            last_recovery_ts: now_ts,
        }
    }

    pub fn spend_gold(&mut self, amount: u64) -> Result<(), CoreError> {
        if self.gold < amount {
            return Err(CoreError::InsufficientGold {
                have: self.gold,
                need: amount,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    pub fn spend_spirit(&mut self, amount: u32) -> Result<(), CoreError> {
        if self.spirit < amount {
            return Err(CoreError::InsufficientSpirit {
                have: self.spirit,
                need: amount,
            });
        }
        self.spirit -= amount;
        Ok(())
    }

    pub fn spend_stamina(&mut self, amount: u32) -> Result<(), CoreError> {
        if self.stamina < amount {
            return Err(CoreError::InsufficientStamina {
                have: self.stamina,
                need: amount,
            });
        }
        self.stamina -= amount;
        Ok(())
    }

    /// Credit spirit and stamina for whole elapsed recovery intervals.
    ///
    /// The timestamp advances by exactly the consumed intervals, so calling
    /// twice inside the same interval credits nothing the second time, and a
    /// partial interval is carried forward rather than lost.
    pub fn recover(&mut self, now_ts: i64) -> RecoveryReport {
        let elapsed = now_ts.saturating_sub(self.last_recovery_ts);
        if elapsed < RECOVERY_INTERVAL_SECONDS {
            return RecoveryReport::default();
        }
        let intervals = (elapsed / RECOVERY_INTERVAL_SECONDS) as u32;
        self.last_recovery_ts += i64::from(intervals) * RECOVERY_INTERVAL_SECONDS;

        let stamina_gained =
            (intervals * STAMINA_PER_INTERVAL).min(self.max_stamina - self.stamina);
        let spirit_gained = (intervals * SPIRIT_PER_INTERVAL).min(self.max_spirit - self.spirit);
        self.stamina += stamina_gained;
        self.spirit += spirit_gained;

        RecoveryReport {
            stamina_gained,
            spirit_gained,
            intervals,
        }
    }
}

//! Per-location exploration progress: gathering and hunting counters with
//! hard caps, boss bookkeeping, and the once-per-day boss challenge gate.

use std::collections::HashMap;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::core::constants::{HUNT_PROGRESS_CAP, MATERIAL_PROGRESS_CAP};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationProgress {
    pub material_progress: u32,
    pub hunt_progress: u32,
    pub boss_defeated: bool,
    pub last_boss_defeat_day: u32,
    /// Calendar day of the last boss attempt, e.g. "2026-08-05". None until
    /// the first challenge.
    pub last_boss_challenge_date: Option<String>,
}

/// All locations the player has touched, created lazily on first access.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationLog {
    pub locations: HashMap<String, LocationProgress>,
}

impl LocationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&LocationProgress> {
        self.locations.get(id)
    }

    pub fn entry_mut(&mut self, id: &str) -> &mut LocationProgress {
        self.locations.entry(id.to_string()).or_default()
    }

    /// Bank gathering progress, saturating at the cap. Returns the new value.
    pub fn add_material_progress(&mut self, id: &str, amount: u32) -> u32 {
        let entry = self.entry_mut(id);
        entry.material_progress = entry
            .material_progress
            .saturating_add(amount)
            .min(MATERIAL_PROGRESS_CAP);
        entry.material_progress
    }

    /// Bank hunting progress, saturating at the cap. Returns the new value.
    pub fn add_hunt_progress(&mut self, id: &str, amount: u32) -> u32 {
        let entry = self.entry_mut(id);
        entry.hunt_progress = entry
            .hunt_progress
            .saturating_add(amount)
            .min(HUNT_PROGRESS_CAP);
        entry.hunt_progress
    }

    /// One boss attempt per location per calendar day.
    pub fn can_challenge_boss(&self, id: &str, date: &str) -> bool {
        match self.get(id).and_then(|l| l.last_boss_challenge_date.as_deref()) {
            Some(last) => last != date,
            None => true,
        }
    }

    pub fn record_boss_challenge(&mut self, id: &str, date: &str) {
        self.entry_mut(id).last_boss_challenge_date = Some(date.to_string());
    }

    pub fn record_boss_defeat(&mut self, id: &str, day: u32) {
        let entry = self.entry_mut(id);
        entry.boss_defeated = true;
        entry.last_boss_defeat_day = day;
    }
}

/// Calendar-day label for a unix timestamp, used as the boss challenge key.
pub fn date_label(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.date_naive().to_string())
        .unwrap_or_else(|| "1970-01-01".to_string())
}

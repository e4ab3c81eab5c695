//! Game clock: a monotonic minute counter that derives the calendar day and
//! the day/night phase, and reports rollovers so daily resets run exactly
//! once per crossed day.

use serde::{Deserialize, Serialize};

use super::constants::{DAY_START_MINUTE, MINUTES_PER_DAY, NIGHT_START_MINUTE, STARTING_MINUTE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayPhase {
    Day,
    Night,
}

/// What an `advance` call observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockEvent {
    /// Emitted once per calendar day crossed.
    NewDay { day: u32 },
    /// The day/night flag flipped between the start and end of the advance.
    PhaseChanged { phase: DayPhase },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    pub total_minutes: u64,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            total_minutes: STARTING_MINUTE,
        }
    }

    /// Day counter, starting at 1.
    pub fn day(&self) -> u32 {
        (self.total_minutes / MINUTES_PER_DAY) as u32 + 1
    }

    pub fn minute_of_day(&self) -> u64 {
        self.total_minutes % MINUTES_PER_DAY
    }

    pub fn phase(&self) -> DayPhase {
        let minute = self.minute_of_day();
        if (DAY_START_MINUTE..NIGHT_START_MINUTE).contains(&minute) {
            DayPhase::Day
        } else {
            DayPhase::Night
        }
    }

    pub fn is_daytime(&self) -> bool {
        self.phase() == DayPhase::Day
    }

    /// Move time forward. Returns one `NewDay` per crossed day boundary plus
    /// a `PhaseChanged` if the day/night flag differs afterwards.
    pub fn advance(&mut self, minutes: u64) -> Vec<ClockEvent> {
        let day_before = self.day();
        let phase_before = self.phase();
        self.total_minutes += minutes;

        let mut events = Vec::new();
        for day in day_before + 1..=self.day() {
            log::info!("day {day} begins");
            events.push(ClockEvent::NewDay { day });
        }
        let phase = self.phase();
        if phase != phase_before {
            log::debug!("phase changed: {phase:?}");
            events.push(ClockEvent::PhaseChanged { phase });
        }
        events
    }
}

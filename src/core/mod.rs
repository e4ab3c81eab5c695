//! Shared tuning constants, the game clock and the top-level state aggregate.

pub mod clock;
pub mod constants;
pub mod game_state;

pub use clock::{ClockEvent, DayPhase, GameClock};
pub use game_state::GameState;

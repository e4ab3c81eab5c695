//! Sublimation: a second progression axis that banks random progress toward
//! levels and promotes rarity at milestone levels.

pub mod logic;
pub mod types;

pub use logic::{sublimate, sublimate_item};
pub use types::{
    max_spirit_gate, milestone_index, progress_threshold, spirit_cost, stamina_cost,
    SublimeOutcome,
};

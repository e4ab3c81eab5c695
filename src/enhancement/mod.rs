//! Equipment enhancement: per-level success rates, stone and gold costs,
//! and downgrade-on-failure resolution.

pub mod logic;
pub mod types;

pub use logic::{enhance, enhance_item, preview, preview_item};
pub use types::{
    effective_stats, level_config, total_bonus, EnhanceLevel, EnhanceOutcome, EnhancePreview,
    MAX_ENHANCE_LEVEL,
};

// Clock
pub const MINUTES_PER_DAY: u64 = 1440;
pub const DAY_START_MINUTE: u64 = 360;
pub const NIGHT_START_MINUTE: u64 = 1080;
/// New games start mid-morning on day 1.
pub const STARTING_MINUTE: u64 = 480;

// Wall-clock recovery
pub const RECOVERY_INTERVAL_SECONDS: i64 = 60;
pub const STAMINA_PER_INTERVAL: u32 = 1;
pub const SPIRIT_PER_INTERVAL: u32 = 1;

// Player starting pools
pub const BASE_MAX_HP: u32 = 100;
pub const BASE_MAX_SPIRIT: u32 = 30;
pub const BASE_MAX_STAMINA: u32 = 50;
pub const STARTING_GOLD: u64 = 200;

// Sublimation
pub const MAX_SUBLIME_LEVEL: u8 = 10;
pub const SUBLIME_MILESTONES: [u8; 3] = [3, 5, 8];
pub const SUBLIME_PROGRESS_MIN: u32 = 10;
pub const SUBLIME_PROGRESS_MAX: u32 = 25;

// Skills
pub const MAX_ACTIVE_SKILLS: usize = 4;

// Location progress caps
pub const MATERIAL_PROGRESS_CAP: u32 = 20;
pub const HUNT_PROGRESS_CAP: u32 = 80;

// Consumable item ids
pub const ENHANCE_STONE_ID: &str = "enhance_stone";
pub const PROTECTION_CHARM_ID: &str = "protection_charm";

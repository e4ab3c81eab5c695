//! Authored skill templates and their unlock chains.

use super::types::{Scaling, SkillKind, SkillTemplate};

const fn active(
    id: &'static str,
    name: &'static str,
    cooldown: u32,
    unlocks: &'static [&'static str],
) -> SkillTemplate {
    SkillTemplate {
        id,
        name,
        kind: SkillKind::Active,
        cooldown,
        damage_percent: Scaling::ZERO,
        heal_percent: Scaling::ZERO,
        buff_attack: Scaling::ZERO,
        buff_defense: Scaling::ZERO,
        buff_speed: Scaling::ZERO,
        stun_chance: Scaling::ZERO,
        crit_boost: Scaling::ZERO,
        drain_hp: Scaling::ZERO,
        unlocks,
    }
}

const fn passive(
    id: &'static str,
    name: &'static str,
    unlocks: &'static [&'static str],
) -> SkillTemplate {
    SkillTemplate {
        id,
        name,
        kind: SkillKind::Passive,
        cooldown: 0,
        damage_percent: Scaling::ZERO,
        heal_percent: Scaling::ZERO,
        buff_attack: Scaling::ZERO,
        buff_defense: Scaling::ZERO,
        buff_speed: Scaling::ZERO,
        stun_chance: Scaling::ZERO,
        crit_boost: Scaling::ZERO,
        drain_hp: Scaling::ZERO,
        unlocks,
    }
}

static TEMPLATES: [SkillTemplate; 10] = [
    SkillTemplate {
        damage_percent: Scaling::new(120.0, 10.0),
        ..active("power_strike", "Power Strike", 2, &["cleave"])
    },
    SkillTemplate {
        damage_percent: Scaling::new(90.0, 8.0),
        stun_chance: Scaling::new(0.10, 0.02),
        ..active("cleave", "Cleave", 3, &["whirlwind"])
    },
    SkillTemplate {
        damage_percent: Scaling::new(70.0, 12.0),
        crit_boost: Scaling::new(5.0, 1.0),
        ..active("whirlwind", "Whirlwind", 4, &[])
    },
    SkillTemplate {
        buff_defense: Scaling::new(20.0, 4.0),
        ..active("brace", "Brace", 3, &["iron_wall"])
    },
    SkillTemplate {
        buff_defense: Scaling::new(35.0, 6.0),
        heal_percent: Scaling::new(5.0, 1.0),
        ..active("iron_wall", "Iron Wall", 5, &["second_wind"])
    },
    SkillTemplate {
        heal_percent: Scaling::new(25.0, 3.0),
        ..active("second_wind", "Second Wind", 5, &[])
    },
    SkillTemplate {
        damage_percent: Scaling::new(60.0, 6.0),
        drain_hp: Scaling::new(30.0, 2.0),
        ..active("leech_strike", "Leech Strike", 4, &[])
    },
    SkillTemplate {
        crit_boost: Scaling::new(3.0, 1.5),
        ..passive("keen_eye", "Keen Eye", &["leech_strike"])
    },
    SkillTemplate {
        buff_attack: Scaling::new(5.0, 2.0),
        ..passive("whetstone_habit", "Whetstone Habit", &[])
    },
    SkillTemplate {
        buff_speed: Scaling::new(4.0, 1.0),
        ..passive("light_step", "Light Step", &[])
    },
];

/// Template lookup by id.
pub fn template(id: &str) -> Option<&'static SkillTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Skills available to a fresh character before any unlock chain fires.
pub fn starting_available() -> Vec<String> {
    ["power_strike", "brace", "keen_eye", "whetstone_habit", "light_step"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillKind {
    Active,
    Passive,
}

/// Linear per-level formula: `base + level * per_level`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scaling {
    pub base: f64,
    pub per_level: f64,
}

impl Scaling {
    pub const ZERO: Scaling = Scaling {
        base: 0.0,
        per_level: 0.0,
    };

    pub const fn new(base: f64, per_level: f64) -> Scaling {
        Scaling { base, per_level }
    }

    pub fn at(&self, level: u32) -> f64 {
        self.base + f64::from(level) * self.per_level
    }
}

/// Authored skill definition. `unlocks` lists the skills made available the
/// moment this one is learned.
#[derive(Debug, Clone, Copy)]
pub struct SkillTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: SkillKind,
    pub cooldown: u32,
    pub damage_percent: Scaling,
    pub heal_percent: Scaling,
    pub buff_attack: Scaling,
    pub buff_defense: Scaling,
    pub buff_speed: Scaling,
    pub stun_chance: Scaling,
    pub crit_boost: Scaling,
    pub drain_hp: Scaling,
    pub unlocks: &'static [&'static str],
}

/// A learned skill. Carries its own scalings so a saved skill evaluates
/// without consulting the template table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub kind: SkillKind,
    pub level: u32,
    pub max_cooldown: u32,
    pub current_cooldown: u32,
    pub use_count: u32,
    pub damage_percent: Scaling,
    pub heal_percent: Scaling,
    pub buff_attack: Scaling,
    pub buff_defense: Scaling,
    pub buff_speed: Scaling,
    pub stun_chance: Scaling,
    pub crit_boost: Scaling,
    pub drain_hp: Scaling,
}

/// Effect numbers at the skill's current level.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkillEffects {
    pub damage_percent: f64,
    pub heal_percent: f64,
    pub buff_attack: f64,
    pub buff_defense: f64,
    pub buff_speed: f64,
    /// Probability, clamped to 1.0.
    pub stun_chance: f64,
    pub crit_boost: f64,
    pub drain_hp: f64,
}

impl Skill {
    pub fn from_template(template: &SkillTemplate) -> Skill {
        Skill {
            id: template.id.to_string(),
            name: template.name.to_string(),
            kind: template.kind,
            level: 1,
            max_cooldown: template.cooldown,
            current_cooldown: 0,
            use_count: 0,
            damage_percent: template.damage_percent,
            heal_percent: template.heal_percent,
            buff_attack: template.buff_attack,
            buff_defense: template.buff_defense,
            buff_speed: template.buff_speed,
            stun_chance: template.stun_chance,
            crit_boost: template.crit_boost,
            drain_hp: template.drain_hp,
        }
    }

    pub fn effects(&self) -> SkillEffects {
        SkillEffects {
            damage_percent: self.damage_percent.at(self.level),
            heal_percent: self.heal_percent.at(self.level),
            buff_attack: self.buff_attack.at(self.level),
            buff_defense: self.buff_defense.at(self.level),
            buff_speed: self.buff_speed.at(self.level),
            stun_chance: self.stun_chance.at(self.level).min(1.0),
            crit_boost: self.crit_boost.at(self.level),
            drain_hp: self.drain_hp.at(self.level),
        }
    }

    pub fn can_use(&self) -> bool {
        self.current_cooldown == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaling_formula() {
        let scaling = Scaling::new(20.0, 5.0);
        assert!((scaling.at(0) - 20.0).abs() < f64::EPSILON);
        assert!((scaling.at(3) - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stun_chance_clamped() {
        let template = SkillTemplate {
            id: "test",
            name: "Test",
            kind: SkillKind::Active,
            cooldown: 2,
            damage_percent: Scaling::ZERO,
            heal_percent: Scaling::ZERO,
            buff_attack: Scaling::ZERO,
            buff_defense: Scaling::ZERO,
            buff_speed: Scaling::ZERO,
            stun_chance: Scaling::new(0.5, 0.2),
            crit_boost: Scaling::ZERO,
            drain_hp: Scaling::ZERO,
            unlocks: &[],
        };
        let mut skill = Skill::from_template(&template);
        skill.level = 10;
        assert!((skill.effects().stun_chance - 1.0).abs() < f64::EPSILON);
    }
}

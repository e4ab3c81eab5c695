//! Skill book tests: learning, slot caps, unlock chains, cooldowns and use.

use railbound::core::constants::MAX_ACTIVE_SKILLS;
use railbound::error::CoreError;
use railbound::skills::{starting_available, template, SkillBook, SkillKind};

fn fresh_book() -> SkillBook {
    SkillBook::new(starting_available())
}

// =========================================================================
// Learning
// =========================================================================

#[test]
fn test_learn_starting_skill() {
    let mut book = fresh_book();
    book.learn("power_strike").unwrap();
    assert!(book.is_learned("power_strike"));
    assert_eq!(book.active.len(), 1);
    assert_eq!(book.active[0].level, 1);
    assert_eq!(book.active[0].current_cooldown, 0);
}

#[test]
fn test_learn_unavailable_skill_rejected() {
    let mut book = fresh_book();
    // cleave only unlocks after power_strike
    assert_eq!(
        book.learn("cleave"),
        Err(CoreError::NotUnlocked("cleave".to_string()))
    );
}

#[test]
fn test_learn_twice_rejected() {
    let mut book = fresh_book();
    book.learn("keen_eye").unwrap();
    assert_eq!(
        book.learn("keen_eye"),
        Err(CoreError::AlreadyLearned("keen_eye".to_string()))
    );
    assert_eq!(book.passive.len(), 1);
}

#[test]
fn test_passives_do_not_consume_active_slots() {
    let mut book = fresh_book();
    book.learn("keen_eye").unwrap();
    book.learn("whetstone_habit").unwrap();
    book.learn("light_step").unwrap();
    assert_eq!(book.passive.len(), 3);
    assert!(book.active.is_empty());
}

#[test]
fn test_active_slot_cap() {
    let mut book = fresh_book();
    // Chain through actives until four are learned
    book.learn("power_strike").unwrap();
    book.learn("cleave").unwrap();
    book.learn("brace").unwrap();
    book.learn("whirlwind").unwrap();
    assert_eq!(book.active.len(), MAX_ACTIVE_SKILLS);

    // iron_wall is available (brace unlocked it) but there is no slot left
    assert_eq!(
        book.learn("iron_wall"),
        Err(CoreError::ActiveSlotsFull(MAX_ACTIVE_SKILLS))
    );
    // Passives still fine
    book.learn("keen_eye").unwrap();
}

// =========================================================================
// Unlock chains
// =========================================================================

#[test]
fn test_learning_opens_unlock_chain() {
    let mut book = fresh_book();
    assert!(!book.available.iter().any(|s| s == "cleave"));
    book.learn("power_strike").unwrap();
    assert!(book.available.iter().any(|s| s == "cleave"));
    book.learn("cleave").unwrap();
    assert!(book.available.iter().any(|s| s == "whirlwind"));
}

#[test]
fn test_unlock_chain_is_idempotent() {
    let mut book = fresh_book();
    // leech_strike is unlocked by keen_eye; seed it as already available
    book.available.push("leech_strike".to_string());
    book.learn("keen_eye").unwrap();
    let count = book
        .available
        .iter()
        .filter(|s| s.as_str() == "leech_strike")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_missing_template_is_configuration_error() {
    let mut book = fresh_book();
    book.available.push("phantom_skill".to_string());
    assert_eq!(
        book.learn("phantom_skill"),
        Err(CoreError::MissingConfiguration("phantom_skill".to_string()))
    );
}

// =========================================================================
// Cooldowns and use
// =========================================================================

#[test]
fn test_use_starts_cooldown_and_counts() {
    let mut book = fresh_book();
    book.learn("power_strike").unwrap();
    let max_cooldown = template("power_strike").unwrap().cooldown;

    assert!(book.can_use("power_strike"));
    assert!(book.use_skill("power_strike"));
    assert_eq!(book.active[0].current_cooldown, max_cooldown);
    assert_eq!(book.active[0].use_count, 1);

    // Cooling down: use fails silently, nothing changes
    assert!(!book.can_use("power_strike"));
    assert!(!book.use_skill("power_strike"));
    assert_eq!(book.active[0].use_count, 1);
}

#[test]
fn test_turn_end_ticks_cooldowns_to_zero() {
    let mut book = fresh_book();
    book.learn("power_strike").unwrap();
    book.use_skill("power_strike");
    let max_cooldown = template("power_strike").unwrap().cooldown;

    for _ in 0..max_cooldown {
        assert!(!book.can_use("power_strike"));
        book.on_turn_end();
    }
    assert!(book.can_use("power_strike"));

    // Extra turns keep the cooldown floored at zero
    book.on_turn_end();
    assert_eq!(book.active[0].current_cooldown, 0);
}

#[test]
fn test_use_unknown_skill_fails_silently() {
    let mut book = fresh_book();
    assert!(!book.use_skill("phantom_skill"));
}

// =========================================================================
// Effects
// =========================================================================

#[test]
fn test_effects_scale_with_level() {
    let mut book = fresh_book();
    book.learn("power_strike").unwrap();
    let level_1 = book.active[0].effects().damage_percent;
    book.active[0].level = 5;
    let level_5 = book.active[0].effects().damage_percent;
    assert!(level_5 > level_1);
}

#[test]
fn test_kind_split_matches_templates() {
    let mut book = fresh_book();
    book.learn("power_strike").unwrap();
    book.learn("keen_eye").unwrap();
    assert_eq!(book.active[0].kind, SkillKind::Active);
    assert_eq!(book.passive[0].kind, SkillKind::Passive);
}

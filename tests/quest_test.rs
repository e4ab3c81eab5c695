//! Quest state machine tests: condition conjunction, wildcard targets,
//! prerequisite cascades, claiming and the daily reset.

use std::collections::HashMap;

use railbound::error::CoreError;
use railbound::quests::{
    starter_quests, Condition, ConditionKind, Quest, QuestKind, QuestLog, QuestReward,
    QuestStatus, ANY_TARGET,
};

fn quest(id: &str, conditions: Vec<Condition>, prerequisites: &[&str]) -> Quest {
    Quest {
        id: id.to_string(),
        title: id.to_string(),
        status: QuestStatus::Locked,
        kind: QuestKind::Normal,
        conditions,
        reward: QuestReward {
            exp: 10,
            gold: 10,
            items: vec![("enhance_stone".to_string(), 1)],
            materials: HashMap::new(),
        },
        prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
    }
}

fn daily(id: &str, conditions: Vec<Condition>) -> Quest {
    Quest {
        kind: QuestKind::Daily,
        ..quest(id, conditions, &[])
    }
}

// =========================================================================
// Activation and conjunction
// =========================================================================

#[test]
fn test_prerequisite_free_quests_activate_on_build() {
    let log = QuestLog::new(vec![
        quest("a", vec![Condition::new(ConditionKind::Kill, "x", 1)], &[]),
        quest(
            "b",
            vec![Condition::new(ConditionKind::Kill, "x", 1)],
            &["a"],
        ),
    ]);
    assert_eq!(log.get("a").unwrap().status, QuestStatus::Active);
    assert_eq!(log.get("b").unwrap().status, QuestStatus::Locked);
}

#[test]
fn test_two_conditions_complete_only_together() {
    let mut log = QuestLog::new(vec![quest(
        "gather",
        vec![
            Condition::new(ConditionKind::Collect, "iron_normal", 3),
            Condition::new(ConditionKind::Collect, "timber_normal", 2),
        ],
        &[],
    )]);

    log.update_progress(ConditionKind::Collect, "iron_normal", 3);
    assert_eq!(log.get("gather").unwrap().status, QuestStatus::Active);

    log.update_progress(ConditionKind::Collect, "timber_normal", 1);
    assert_eq!(log.get("gather").unwrap().status, QuestStatus::Active);

    let completed = log.update_progress(ConditionKind::Collect, "timber_normal", 1);
    assert_eq!(completed, vec!["gather".to_string()]);
    assert_eq!(log.get("gather").unwrap().status, QuestStatus::Completed);
}

#[test]
fn test_wildcard_condition_matches_any_target() {
    let mut log = QuestLog::new(vec![quest(
        "hunt",
        vec![Condition::new(ConditionKind::Kill, ANY_TARGET, 2)],
        &[],
    )]);
    log.update_progress(ConditionKind::Kill, "rust_hound", 1);
    log.update_progress(ConditionKind::Kill, "marsh_stalker", 1);
    assert_eq!(log.get("hunt").unwrap().status, QuestStatus::Completed);
}

#[test]
fn test_progress_ignores_wrong_kind_and_target() {
    let mut log = QuestLog::new(vec![quest(
        "specific",
        vec![Condition::new(ConditionKind::Kill, "rust_hound", 1)],
        &[],
    )]);
    log.update_progress(ConditionKind::Collect, "rust_hound", 5);
    log.update_progress(ConditionKind::Kill, "marsh_stalker", 5);
    assert_eq!(log.get("specific").unwrap().status, QuestStatus::Active);
}

#[test]
fn test_locked_quests_gain_no_progress() {
    let mut log = QuestLog::new(vec![
        quest("a", vec![Condition::new(ConditionKind::Kill, "x", 1)], &[]),
        quest(
            "b",
            vec![Condition::new(ConditionKind::Kill, "x", 2)],
            &["a"],
        ),
    ]);
    // Both kills match b's condition, but b is still locked
    log.update_progress(ConditionKind::Kill, "x", 1);
    assert_eq!(log.get("b").unwrap().status, QuestStatus::Active);
    assert_eq!(log.get("b").unwrap().conditions[0].current, 0);
}

// =========================================================================
// Unlock cascade
// =========================================================================

#[test]
fn test_cascade_requires_all_prerequisites() {
    let mut log = QuestLog::new(vec![
        quest("a", vec![Condition::new(ConditionKind::Kill, "x", 1)], &[]),
        quest(
            "b",
            vec![Condition::new(ConditionKind::Collect, "y", 1)],
            &[],
        ),
        quest(
            "c",
            vec![Condition::new(ConditionKind::Kill, "z", 1)],
            &["a", "b"],
        ),
    ]);

    log.update_progress(ConditionKind::Kill, "x", 1);
    // Only a is complete; c stays locked
    assert_eq!(log.get("c").unwrap().status, QuestStatus::Locked);

    log.update_progress(ConditionKind::Collect, "y", 1);
    assert_eq!(log.get("c").unwrap().status, QuestStatus::Active);
}

#[test]
fn test_cascade_chains_through_multiple_layers() {
    let mut log = QuestLog::new(vec![
        quest("a", vec![Condition::new(ConditionKind::Kill, "x", 1)], &[]),
        // b and c are both already satisfied (zero-count conditions) and
        // unlock in one cascade pass once a completes
        quest("b", vec![], &["a"]),
        quest("c", vec![Condition::new(ConditionKind::Kill, "y", 1)], &["b"]),
    ]);

    log.update_progress(ConditionKind::Kill, "x", 1);
    // b activated; with no conditions it is not auto-completed by activation
    assert_eq!(log.get("b").unwrap().status, QuestStatus::Active);
    assert_eq!(log.get("c").unwrap().status, QuestStatus::Locked);
}

#[test]
fn test_rewarded_status_satisfies_prerequisites() {
    let mut log = QuestLog::new(vec![
        quest("a", vec![Condition::new(ConditionKind::Kill, "x", 1)], &[]),
        quest(
            "b",
            vec![Condition::new(ConditionKind::Kill, "y", 1)],
            &["a"],
        ),
    ]);
    log.update_progress(ConditionKind::Kill, "x", 1);
    log.claim_reward("a").unwrap();
    assert_eq!(log.get("a").unwrap().status, QuestStatus::Rewarded);
    assert_eq!(log.get("b").unwrap().status, QuestStatus::Active);
}

// =========================================================================
// Claiming
// =========================================================================

#[test]
fn test_claim_returns_reward_and_transitions() {
    let mut log = QuestLog::new(vec![quest(
        "a",
        vec![Condition::new(ConditionKind::Kill, "x", 1)],
        &[],
    )]);
    log.update_progress(ConditionKind::Kill, "x", 1);

    let reward = log.claim_reward("a").unwrap();
    assert_eq!(reward.exp, 10);
    assert_eq!(reward.gold, 10);
    assert_eq!(reward.items, vec![("enhance_stone".to_string(), 1)]);
    assert_eq!(log.get("a").unwrap().status, QuestStatus::Rewarded);

    // A second claim is rejected
    assert_eq!(
        log.claim_reward("a"),
        Err(CoreError::NotCompletable("a".to_string()))
    );
}

#[test]
fn test_claim_rejects_active_and_unknown_quests() {
    let mut log = QuestLog::new(vec![quest(
        "a",
        vec![Condition::new(ConditionKind::Kill, "x", 1)],
        &[],
    )]);
    assert_eq!(
        log.claim_reward("a"),
        Err(CoreError::NotCompletable("a".to_string()))
    );
    assert_eq!(
        log.claim_reward("ghost"),
        Err(CoreError::QuestNotFound("ghost".to_string()))
    );
}

// =========================================================================
// Daily reset
// =========================================================================

#[test]
fn test_daily_reset_zeroes_active_dailies_only() {
    let mut log = QuestLog::new(vec![
        daily(
            "patrol",
            vec![Condition::new(ConditionKind::Kill, ANY_TARGET, 5)],
        ),
        daily(
            "forage",
            vec![Condition::new(ConditionKind::Collect, ANY_TARGET, 2)],
        ),
        quest(
            "story",
            vec![Condition::new(ConditionKind::Kill, ANY_TARGET, 10)],
            &[],
        ),
    ]);

    log.update_progress(ConditionKind::Kill, "rust_hound", 3);
    log.update_progress(ConditionKind::Collect, "iron_normal", 2);
    assert_eq!(log.get("forage").unwrap().status, QuestStatus::Completed);

    log.reset_daily();

    // Active daily loses progress but stays active
    assert_eq!(log.get("patrol").unwrap().status, QuestStatus::Active);
    assert_eq!(log.get("patrol").unwrap().conditions[0].current, 0);
    // Completed daily is left for the caller's policy
    assert_eq!(log.get("forage").unwrap().status, QuestStatus::Completed);
    assert_eq!(log.get("forage").unwrap().conditions[0].current, 2);
    // Normal quests keep their progress
    assert_eq!(log.get("story").unwrap().conditions[0].current, 3);
}

// =========================================================================
// Starter data
// =========================================================================

#[test]
fn test_starter_chain_progression() {
    let mut log = QuestLog::new(starter_quests());
    assert_eq!(log.get("first_camp").unwrap().status, QuestStatus::Active);
    assert_eq!(
        log.get("stock_the_bench").unwrap().status,
        QuestStatus::Locked
    );

    log.update_progress(ConditionKind::Explore, "rusting_yards", 1);
    assert_eq!(
        log.get("first_camp").unwrap().status,
        QuestStatus::Completed
    );
    assert_eq!(
        log.get("stock_the_bench").unwrap().status,
        QuestStatus::Active
    );

    let reward = log.claim_reward("first_camp").unwrap();
    assert_eq!(reward.materials.get("timber_normal"), Some(&5));
}

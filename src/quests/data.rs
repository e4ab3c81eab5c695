//! Starter quest definitions.

use std::collections::HashMap;

use super::types::{Condition, ConditionKind, Quest, QuestKind, QuestReward, QuestStatus, ANY_TARGET};

fn quest(
    id: &str,
    title: &str,
    kind: QuestKind,
    conditions: Vec<Condition>,
    reward: QuestReward,
    prerequisites: &[&str],
) -> Quest {
    Quest {
        id: id.to_string(),
        title: title.to_string(),
        status: QuestStatus::Locked,
        kind,
        conditions,
        reward,
        prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
    }
}

fn reward(exp: u64, gold: u64, items: &[(&str, u32)], materials: &[(&str, u32)]) -> QuestReward {
    QuestReward {
        exp,
        gold,
        items: items.iter().map(|(id, n)| (id.to_string(), *n)).collect(),
        materials: materials
            .iter()
            .map(|(id, n)| (id.to_string(), *n))
            .collect::<HashMap<_, _>>(),
    }
}

/// The quest set a new game starts with. Everything without prerequisites
/// activates as soon as the log is built.
pub fn starter_quests() -> Vec<Quest> {
    vec![
        quest(
            "first_camp",
            "Settle In",
            QuestKind::Normal,
            vec![Condition::new(ConditionKind::Explore, "rusting_yards", 1)],
            reward(50, 100, &[], &[("timber_normal", 5), ("iron_normal", 5)]),
            &[],
        ),
        quest(
            "first_hunt",
            "Fresh Tracks",
            QuestKind::Normal,
            vec![Condition::new(ConditionKind::Kill, ANY_TARGET, 3)],
            reward(80, 120, &[], &[("hide_normal", 4)]),
            &[],
        ),
        quest(
            "stock_the_bench",
            "Stock the Workbench",
            QuestKind::Normal,
            vec![
                Condition::new(ConditionKind::Collect, "iron_normal", 5),
                Condition::new(ConditionKind::Collect, "timber_normal", 3),
            ],
            reward(100, 150, &[("enhance_stone", 2)], &[]),
            &["first_camp"],
        ),
        quest(
            "forge_a_blade",
            "Forge a Blade",
            QuestKind::Normal,
            vec![Condition::new(ConditionKind::Craft, "weapon", 1)],
            reward(150, 200, &[("enhance_stone", 3)], &[]),
            &["stock_the_bench"],
        ),
        quest(
            "temper_the_blade",
            "Temper the Blade",
            QuestKind::Normal,
            vec![Condition::new(ConditionKind::Enhance, ANY_TARGET, 3)],
            reward(200, 300, &[("protection_charm", 1)], &[]),
            &["forge_a_blade"],
        ),
        quest(
            "master_of_the_line",
            "Master of the Line",
            QuestKind::Normal,
            vec![
                Condition::new(ConditionKind::Kill, ANY_TARGET, 20),
                Condition::new(ConditionKind::Craft, ANY_TARGET, 3),
            ],
            reward(500, 800, &[("protection_charm", 2)], &[("crystal_good", 3)]),
            &["first_hunt", "temper_the_blade"],
        ),
        quest(
            "daily_patrol",
            "Patrol the Perimeter",
            QuestKind::Daily,
            vec![Condition::new(ConditionKind::Kill, ANY_TARGET, 5)],
            reward(60, 80, &[], &[]),
            &[],
        ),
        quest(
            "daily_forage",
            "Forage Along the Tracks",
            QuestKind::Daily,
            vec![Condition::new(ConditionKind::Collect, ANY_TARGET, 10)],
            reward(40, 60, &[], &[("fiber_normal", 2)]),
            &[],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_quests_unique_ids() {
        let quests = starter_quests();
        let mut ids: Vec<_> = quests.iter().map(|q| q.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), quests.len());
    }

    #[test]
    fn test_prerequisites_reference_real_quests() {
        let quests = starter_quests();
        for quest in &quests {
            for prerequisite in &quest.prerequisites {
                assert!(
                    quests.iter().any(|q| &q.id == prerequisite),
                    "{} references missing prerequisite {}",
                    quest.id,
                    prerequisite
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::battle::engine::simulate_round;
    use crate::battle::state::{BattleEvent, GameState};
    use crate::battle::tests::common::{
        TestGroupBuilder, attrs, create_test_battle, standard_rules,
    };
    use pretty_assertions::assert_eq;
    use schema::{ArmyBuffs, TroopType};

    #[test]
    fn test_standard_matchup_opening_rounds() {
        let rules = standard_rules();
        let start = create_test_battle(
            vec![TestGroupBuilder::new(TroopType::Infantry, 1).build()],
            vec![TestGroupBuilder::new(TroopType::Archers, 1).build()],
        );

        // Round 1: the infantry cover their full 350, the archers react to
        // the new line and close 100. Nobody is in range yet.
        let (round1, events) = simulate_round(&start, &rules);
        assert_eq!(events.events()[0], BattleEvent::RoundStarted { round: 1 });
        assert_eq!(round1.round, 1);
        assert_eq!(round1.army1.troops[0].position, 350);
        assert_eq!(round1.army2.troops[0].position, 1400);
        assert_eq!(round1.army1.troops[0].quantity, 1000);
        assert_eq!(round1.army2.troops[0].quantity, 1000);
        assert!(round1.battle_log.is_empty());

        // Round 2: still closing.
        let (round2, _) = simulate_round(&round1, &rules);
        assert_eq!(round2.army1.troops[0].position, 700);
        assert_eq!(round2.army2.troops[0].position, 1300);
        assert!(round2.battle_log.is_empty());

        // Round 3: the archers hold at distance 250 and loose their first
        // volley. 130 * 1000 / 300 = 433 damage does not reach a single
        // 600 hp kill, and the empty-handed strike is still logged.
        let (round3, _) = simulate_round(&round2, &rules);
        assert_eq!(round3.army1.troops[0].position, 1050);
        assert_eq!(round3.army2.troops[0].position, 1300);
        assert_eq!(round3.battle_log, vec!["Archers T1 killed 0 Infantry T1"]);
        assert_eq!(round3.army1.troops[0].quantity, 1000);

        // Round 4: the infantry reach melee and land the first kills.
        let (round4, _) = simulate_round(&round3, &rules);
        assert_eq!(round4.army1.troops[0].position, 1250);
        assert_eq!(
            round4.battle_log,
            vec![
                "Archers T1 killed 0 Infantry T1",
                "Infantry T1 killed 4 Archers T1",
                "Archers T1 killed 0 Infantry T1",
            ]
        );
        assert_eq!(round4.army2.troops[0].quantity, 996);
    }

    #[test]
    fn test_army_2_reacts_to_army_1_movement() {
        // A sprinter that covers 1000 in one step: the archers see it at
        // 1000, exactly at their 500 range, and hold instead of advancing
        // against the stale position.
        let state = create_test_battle(
            vec![
                TestGroupBuilder::new(TroopType::Infantry, 1)
                    .with_attributes(attrs(10, 15, 100, 1000, 50))
                    .build(),
            ],
            vec![TestGroupBuilder::new(TroopType::Archers, 1).build()],
        );

        let (after, _) = simulate_round(&state, &standard_rules());

        assert_eq!(after.army1.troops[0].position, 1000);
        assert_eq!(after.army2.troops[0].position, 1500);
    }

    #[test]
    fn test_first_mover_wins_the_mirror_matchup() {
        // Identical duelists that kill each other outright: army 1 strikes
        // first and wipes the enemy, the emptied group still takes its
        // strike back and fells a single unit.
        let duelist = attrs(100, 100, 1, 750, 50);
        let state = create_test_battle(
            vec![
                TestGroupBuilder::new(TroopType::Infantry, 1)
                    .with_attributes(duelist)
                    .with_quantity(100)
                    .build(),
            ],
            vec![
                TestGroupBuilder::new(TroopType::Infantry, 1)
                    .with_attributes(duelist)
                    .with_quantity(100)
                    .build(),
            ],
        );

        let (after, events) = simulate_round(&state, &standard_rules());

        assert_eq!(after.outcome(), GameState::Army1Win);
        assert_eq!(after.army1.troops[0].quantity, 99);
        assert!(after.army2.troops.is_empty());
        assert!(
            events
                .events()
                .contains(&BattleEvent::BattleEnded { winner: Some(0) })
        );
    }

    #[test]
    fn test_battle_log_keeps_army_1_lines_first() {
        let stats = attrs(10, 100, 10, 50, 1500);
        let state = create_test_battle(
            vec![
                TestGroupBuilder::new(TroopType::Siege, 1)
                    .with_attributes(stats)
                    .with_quantity(100)
                    .build(),
                TestGroupBuilder::new(TroopType::Cavalry, 1)
                    .with_attributes(stats)
                    .with_quantity(100)
                    .build(),
            ],
            vec![
                TestGroupBuilder::new(TroopType::Archers, 1)
                    .with_attributes(stats)
                    .with_quantity(100)
                    .build(),
            ],
        );

        let (after, _) = simulate_round(&state, &standard_rules());

        assert_eq!(
            after.battle_log,
            vec![
                "Siege T1 killed 1 Archers T1",
                "Cavalry T1 killed 1 Archers T1",
                "Archers T1 killed 0 Cavalry T1",
            ]
        );
    }

    #[test]
    fn test_wiped_groups_leave_the_field_when_the_round_ends() {
        let state = create_test_battle(
            vec![
                TestGroupBuilder::new(TroopType::Infantry, 1)
                    .with_attributes(attrs(100, 100, 10, 50, 1500))
                    .with_quantity(100)
                    .build(),
            ],
            vec![
                TestGroupBuilder::new(TroopType::Archers, 1)
                    .with_attributes(attrs(1, 100, 1, 50, 10))
                    .with_quantity(50)
                    .build(),
                TestGroupBuilder::new(TroopType::Infantry, 2)
                    .with_attributes(attrs(1, 100, 1000, 50, 10))
                    .with_quantity(200)
                    .build(),
            ],
        );

        let (after, events) = simulate_round(&state, &standard_rules());

        assert_eq!(after.army2.troops.len(), 1);
        assert_eq!(after.army2.troops[0].kind, TroopType::Infantry);
        assert_eq!(after.outcome(), GameState::InProgress);
        assert!(events.events().contains(&BattleEvent::GroupDestroyed {
            army_index: 1,
            kind: TroopType::Archers,
            tier: 1,
        }));
    }

    #[test]
    fn test_mutual_annihilation_ends_in_a_draw() {
        let lone = attrs(1, 1, 1, 50, 1500);
        let state = create_test_battle(
            vec![
                TestGroupBuilder::new(TroopType::Infantry, 1)
                    .with_attributes(lone)
                    .with_quantity(1)
                    .build(),
            ],
            vec![
                TestGroupBuilder::new(TroopType::Infantry, 1)
                    .with_attributes(lone)
                    .with_quantity(1)
                    .build(),
            ],
        );

        let (after, events) = simulate_round(&state, &standard_rules());

        assert_eq!(after.outcome(), GameState::Draw);
        assert!(after.army1.troops.is_empty());
        assert!(after.army2.troops.is_empty());
        assert!(
            events
                .events()
                .contains(&BattleEvent::BattleEnded { winner: None })
        );
    }

    #[test]
    fn test_round_simulation_is_deterministic() {
        let rules = standard_rules();
        let state = create_test_battle(
            vec![TestGroupBuilder::new(TroopType::Infantry, 1).build()],
            vec![TestGroupBuilder::new(TroopType::Archers, 1).build()],
        );

        let (first, first_events) = simulate_round(&state, &rules);
        let (second, second_events) = simulate_round(&state, &rules);

        assert_eq!(first, second);
        assert_eq!(first_events.events(), second_events.events());
    }

    #[test]
    fn test_rounds_from_a_finished_battle_are_no_ops() {
        let state = create_test_battle(
            vec![TestGroupBuilder::new(TroopType::Infantry, 1).build()],
            vec![],
        );

        let (after, events) = simulate_round(&state, &standard_rules());

        assert_eq!(after, state);
        assert!(events.is_empty());
    }

    #[test]
    fn test_buffs_are_carried_but_do_not_change_the_math() {
        let rules = standard_rules();
        let plain = create_test_battle(
            vec![TestGroupBuilder::new(TroopType::Infantry, 1).build()],
            vec![TestGroupBuilder::new(TroopType::Archers, 1).build()],
        );
        let doubled = ArmyBuffs {
            attack: 2000,
            defense: 2000,
            hp: 2000,
        };
        let mut buffed = plain.clone();
        buffed.army1.buffs = doubled;

        let (plain_after, _) = simulate_round(&plain, &rules);
        let (buffed_after, _) = simulate_round(&buffed, &rules);

        assert_eq!(buffed_after.army1.buffs, doubled);
        assert_eq!(plain_after.army1.troops, buffed_after.army1.troops);
        assert_eq!(plain_after.army2.troops, buffed_after.army2.troops);
    }

    #[test]
    fn test_positions_stay_on_the_battlefield() {
        let rules = standard_rules();
        let mut state = create_test_battle(
            vec![TestGroupBuilder::new(TroopType::Cavalry, 1).build()],
            vec![TestGroupBuilder::new(TroopType::Cavalry, 1).build()],
        );

        for _ in 0..10 {
            let (next, _) = simulate_round(&state, &rules);
            state = next;
            for group in state.army1.troops.iter().chain(state.army2.troops.iter()) {
                assert!(group.position <= state.battlefield_width);
            }
        }
    }
}

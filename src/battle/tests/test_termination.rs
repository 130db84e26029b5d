#[cfg(test)]
mod tests {
    use crate::battle::engine::simulate_round;
    use crate::battle::state::{BattleEvent, GameState};
    use crate::battle::tests::common::{
        TestGroupBuilder, attrs, create_test_battle, standard_rules,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::TroopType;

    #[rstest]
    #[case(false, false, GameState::InProgress)]
    #[case(false, true, GameState::Army1Win)]
    #[case(true, false, GameState::Army2Win)]
    #[case(true, true, GameState::Draw)]
    fn test_outcome_classification(
        #[case] army1_empty: bool,
        #[case] army2_empty: bool,
        #[case] expected: GameState,
    ) {
        let roster = |empty: bool| {
            if empty {
                vec![]
            } else {
                vec![TestGroupBuilder::new(TroopType::Infantry, 1).build()]
            }
        };
        let state = create_test_battle(roster(army1_empty), roster(army2_empty));

        assert_eq!(state.outcome(), expected);
        assert_eq!(state.is_battle_over(), expected != GameState::InProgress);
    }

    #[test]
    fn test_winner_indexes_follow_army_order() {
        assert_eq!(GameState::Army1Win.winner(), Some(0));
        assert_eq!(GameState::Army2Win.winner(), Some(1));
        assert_eq!(GameState::Draw.winner(), None);
        assert_eq!(GameState::InProgress.winner(), None);
    }

    #[test]
    fn test_only_in_progress_is_not_terminal() {
        assert!(!GameState::InProgress.is_terminal());
        assert!(GameState::Army1Win.is_terminal());
        assert!(GameState::Army2Win.is_terminal());
        assert!(GameState::Draw.is_terminal());
    }

    #[test]
    fn test_a_battle_against_an_empty_army_is_over_before_it_starts() {
        let state = create_test_battle(
            vec![TestGroupBuilder::new(TroopType::Cavalry, 1).build()],
            vec![],
        );

        assert!(state.is_battle_over());
        assert_eq!(state.outcome(), GameState::Army1Win);
        assert_eq!(state.round, 0);
    }

    #[test]
    fn test_battle_ended_fires_only_on_the_final_round() {
        // Two rounds of one kill each against a two unit group.
        let rules = standard_rules();
        let state = create_test_battle(
            vec![
                TestGroupBuilder::new(TroopType::Siege, 1)
                    .with_attributes(attrs(10, 1, 1000, 50, 1500))
                    .with_quantity(1)
                    .build(),
            ],
            vec![
                TestGroupBuilder::new(TroopType::Infantry, 1)
                    .with_attributes(attrs(1, 1, 10, 50, 10))
                    .with_quantity(2)
                    .build(),
            ],
        );

        let (round1, round1_events) = simulate_round(&state, &rules);
        assert_eq!(round1.outcome(), GameState::InProgress);
        assert!(
            !round1_events
                .events()
                .iter()
                .any(|event| matches!(event, BattleEvent::BattleEnded { .. }))
        );

        let (round2, round2_events) = simulate_round(&round1, &rules);
        assert_eq!(round2.outcome(), GameState::Army1Win);
        assert!(
            round2_events
                .events()
                .contains(&BattleEvent::BattleEnded { winner: Some(0) })
        );
    }
}

use crate::battle::combat::resolve_combat;
use crate::battle::movement::{advance_troops, Advance};
use crate::battle::state::{Army, BattleEvent, BattleState, EventBus, TroopGroup};
use crate::rules::Rules;

/// Main entry point for round resolution
/// Takes a battle snapshot, executes one complete round against it and
/// returns the next snapshot plus an EventBus of everything that happened.
/// The input state is never modified, so callers can keep every round for
/// history navigation.
///
/// Army 1 is the first mover throughout: it advances first (army 2 then
/// reacts to the updated line), and its attack pass runs first (army 2 then
/// strikes back with whatever quantities that pass left standing). Groups
/// reduced to zero units still take their strike in the same round; they
/// leave the field when the round ends.
///
/// A round simulated from a finished battle is a no-op: the same snapshot
/// comes back and no events are emitted.
pub fn simulate_round(state: &BattleState, rules: &Rules) -> (BattleState, EventBus) {
    let mut events = EventBus::new();

    if state.is_battle_over() {
        return (state.clone(), events);
    }

    events.push(BattleEvent::RoundStarted {
        round: state.round + 1,
    });

    let width = state.battlefield_width;

    // Movement phase. Army 1 moves first, army 2 reacts to the new line.
    let army1_troops = advance_troops(
        &state.army1.troops,
        &state.army2.troops,
        Advance::Rightward,
        width,
    );
    let army2_troops = advance_troops(&state.army2.troops, &army1_troops, Advance::Leftward, width);

    // Combat phase. Army 1's pass runs first; army 2 retaliates with the
    // quantities that pass left standing.
    let (army1_troops, army2_troops, army1_attacks) =
        resolve_combat(&army1_troops, &army2_troops, rules);
    let (army2_troops, army1_troops, army2_attacks) =
        resolve_combat(&army2_troops, &army1_troops, rules);

    // The battle log keeps one line per strike, army 1's lines first.
    let mut battle_log = state.battle_log.clone();
    for event in army1_attacks.iter().chain(army2_attacks.iter()) {
        if let Some(line) = event.format() {
            battle_log.push(line);
        }
    }

    let (army1_troops, destroyed1) = remove_destroyed(army1_troops, 0);
    let (army2_troops, destroyed2) = remove_destroyed(army2_troops, 1);

    for event in army1_attacks
        .into_iter()
        .chain(army2_attacks)
        .chain(destroyed1)
        .chain(destroyed2)
    {
        events.push(event);
    }

    let new_state = BattleState {
        army1: Army {
            troops: army1_troops,
            buffs: state.army1.buffs,
        },
        army2: Army {
            troops: army2_troops,
            buffs: state.army2.buffs,
        },
        round: state.round + 1,
        battle_log,
        battlefield_width: width,
    };

    if new_state.is_battle_over() {
        events.push(BattleEvent::BattleEnded {
            winner: new_state.outcome().winner(),
        });
    }

    (new_state, events)
}

/// Drop groups with no units left, reporting one event per dropped group.
fn remove_destroyed(
    troops: Vec<TroopGroup>,
    army_index: usize,
) -> (Vec<TroopGroup>, Vec<BattleEvent>) {
    let mut survivors = Vec::with_capacity(troops.len());
    let mut events = Vec::new();
    for group in troops {
        if group.quantity > 0 {
            survivors.push(group);
        } else {
            events.push(BattleEvent::GroupDestroyed {
                army_index,
                kind: group.kind,
                tier: group.tier,
            });
        }
    }
    (survivors, events)
}

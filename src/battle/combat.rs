use crate::battle::damage::{attack_damage, casualties};
use crate::battle::state::{BattleEvent, TroopGroup};
use crate::battle::targeting::find_target;
use crate::rules::Rules;

/// One side's full attack pass.
///
/// Attackers strike in roster order against working copies of both sides.
/// The pass is sequential: casualties from earlier attackers reduce the
/// quantities later attackers see, so two groups hammering the same target
/// cannot kill more units than the target has. Every attacker that finds a
/// target produces an [`BattleEvent::AttackLanded`], including strikes that
/// kill nobody. Attacker quantities are not touched here; the returned
/// attacker roster is a plain copy of the input.
pub fn resolve_combat(
    attacking_troops: &[TroopGroup],
    defending_troops: &[TroopGroup],
    rules: &Rules,
) -> (Vec<TroopGroup>, Vec<TroopGroup>, Vec<BattleEvent>) {
    let attackers = attacking_troops.to_vec();
    let mut defenders = defending_troops.to_vec();
    let mut events = Vec::new();

    for attacker in &attackers {
        let Some(target_index) = find_target(attacker, &defenders, rules) else {
            continue;
        };
        let damage = attack_damage(attacker, &defenders[target_index]);
        let target = &mut defenders[target_index];
        let killed = casualties(damage, target);
        target.quantity -= killed;
        events.push(BattleEvent::AttackLanded {
            attacker_kind: attacker.kind,
            attacker_tier: attacker.tier,
            killed,
            target_kind: target.kind,
            target_tier: target.tier,
        });
    }

    (attackers, defenders, events)
}

use crate::battle::state::TroopGroup;

/// Damage a full group strike deals to `target`: the attacker's per-unit
/// attack times its quantity, divided by the target's per-unit defense,
/// floored. Every strike deals at least 1 damage. A zero defense value is
/// treated as 1 so the division stays defined.
pub fn attack_damage(attacker: &TroopGroup, target: &TroopGroup) -> u64 {
    let attack_power = u64::from(attacker.attributes.attack) * u64::from(attacker.quantity);
    let defense = u64::from(target.attributes.defense.max(1));
    (attack_power / defense).max(1)
}

/// Units `damage` removes from `target`: one unit per full hp quantum,
/// never more than the units present. A zero hp value is treated as 1.
pub fn casualties(damage: u64, target: &TroopGroup) -> u32 {
    let hp = u64::from(target.attributes.hp.max(1));
    let killed = damage / hp;
    killed.min(u64::from(target.quantity)) as u32
}

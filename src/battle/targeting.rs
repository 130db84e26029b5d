use crate::battle::state::TroopGroup;
use crate::rules::Rules;

/// Pick the defending group `attacker` should strike this round, if any.
///
/// Defenders are narrowed to those within the attacker's range (distance
/// equal to range still counts), then the attacker kind's priority list
/// decides among them: the first listed kind with an in-range defender wins,
/// and within that kind the earliest defender in the slice. Returns the
/// index into `defenders` so callers can apply casualties in place.
pub fn find_target(attacker: &TroopGroup, defenders: &[TroopGroup], rules: &Rules) -> Option<usize> {
    let in_range: Vec<usize> = defenders
        .iter()
        .enumerate()
        .filter(|(_, defender)| attacker.distance_to(defender) <= attacker.attributes.range)
        .map(|(index, _)| index)
        .collect();

    if in_range.is_empty() {
        return None;
    }

    for &kind in rules.target_priority(attacker.kind) {
        if let Some(&index) = in_range
            .iter()
            .find(|&&index| defenders[index].kind == kind)
        {
            return Some(index);
        }
    }

    // Unreachable while priority lists cover every kind, kept so a partial
    // list would still produce a target.
    in_range.first().copied()
}

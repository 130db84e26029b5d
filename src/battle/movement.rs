use crate::battle::state::TroopGroup;

/// Direction an army advances along the battlefield axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Toward increasing positions (army 1, from the left edge).
    Rightward,
    /// Toward decreasing positions (army 2, from the right edge).
    Leftward,
}

/// Find the enemy group closest to `troop` by absolute distance.
/// Ties resolve to the earliest enemy in the slice.
pub fn closest_enemy<'a>(troop: &TroopGroup, enemies: &'a [TroopGroup]) -> Option<&'a TroopGroup> {
    // min_by_key keeps the first of equally distant groups.
    enemies.iter().min_by_key(|enemy| troop.distance_to(enemy))
}

/// Move every group one step toward its closest enemy.
///
/// A group holds position when it has no enemies or its closest enemy is
/// already within attack range. Otherwise it covers up to its speed, never
/// more than the gap between the current distance and its range, and never
/// leaves the battlefield. The direction of travel is fixed per side; a
/// group never turns around, even when its closest enemy is behind it.
pub fn advance_troops(
    troops: &[TroopGroup],
    enemy_troops: &[TroopGroup],
    direction: Advance,
    battlefield_width: u32,
) -> Vec<TroopGroup> {
    troops
        .iter()
        .map(|troop| {
            let Some(enemy) = closest_enemy(troop, enemy_troops) else {
                return troop.clone();
            };
            let distance = troop.distance_to(enemy);
            if distance <= troop.attributes.range {
                return troop.clone();
            }
            let step = troop.attributes.speed.min(distance - troop.attributes.range);
            let position = match direction {
                Advance::Rightward => troop.position.saturating_add(step).min(battlefield_width),
                Advance::Leftward => troop.position.saturating_sub(step),
            };
            TroopGroup {
                position,
                ..troop.clone()
            }
        })
        .collect()
}

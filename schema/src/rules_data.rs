use crate::troop::{TroopAttributes, TroopType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of tiers every progression table must cover.
pub const TIER_COUNT: usize = 16;

/// Per-tier progression of the scaling attributes for one troop kind.
/// Index 0 holds tier 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCurve {
    pub attack: Vec<u32>,
    pub defense: Vec<u32>,
    pub hp: Vec<u32>,
}

/// The raw balance tables a battle runs on, as stored in `rules.ron`.
/// Contents are unvalidated until wrapped by the engine's rules type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesData {
    /// Length of the one-dimensional battlefield axis.
    pub battlefield_width: u32,
    /// Baseline attributes per troop kind. Attribute resolution keeps
    /// `speed` and `range` from here and replaces `attack`, `defense` and
    /// `hp` with the tier curve values.
    pub base_stats: HashMap<TroopType, TroopAttributes>,
    /// Tier progression of the scaling stats per troop kind.
    pub tier_curves: HashMap<TroopType, TierCurve>,
    /// Target kind preference per attacking kind, most preferred first.
    pub target_priority: HashMap<TroopType, Vec<TroopType>>,
    /// Siege engine range per tier. Index 0 holds tier 1.
    pub siege_ranges: Vec<u32>,
}

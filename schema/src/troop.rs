use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum TroopType {
    Infantry,
    Archers,
    Cavalry,
    Siege,
}

impl fmt::Display for TroopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Per-unit combat attributes of a troop group. `attack`, `defense` and `hp`
/// scale with tier, `speed` is fixed per kind, and `range` is fixed per kind
/// except for siege engines, which use a per-tier range table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TroopAttributes {
    pub attack: u32,
    pub defense: u32,
    pub hp: u32,
    pub speed: u32,
    pub range: u32,
}

/// Army-wide stat buffs in thousandths (1000 = x1.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmyBuffs {
    pub attack: u32,
    pub defense: u32,
    pub hp: u32,
}

impl Default for ArmyBuffs {
    fn default() -> Self {
        Self {
            attack: 1000,
            defense: 1000,
            hp: 1000,
        }
    }
}

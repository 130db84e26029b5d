// In: src/lib.rs

//! Battleline Battle Engine
//!
//! A deterministic, round-based battle simulator for two armies of typed,
//! tiered troop groups on a one-dimensional battlefield. Rounds are pure
//! snapshot-to-snapshot transitions, so whole battles can be replayed and
//! stepped through round by round.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod composition;
pub mod errors;
pub mod prefab_armies;
pub mod rules;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `battleline` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export all core data definitions and static enums.
pub use schema::{ArmyBuffs, RulesData, TierCurve, TroopAttributes, TroopType, TIER_COUNT};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::simulate_round;
pub use battle::state::{Army, BattleEvent, BattleState, EventBus, GameState, TroopGroup};

// Movement, targeting and damage primitives.
pub use battle::damage::{attack_damage, casualties};
pub use battle::movement::{advance_troops, closest_enemy, Advance};
pub use battle::targeting::find_target;

// High-level battle management.
pub use battle::runner::{
    ArmyInfo, BattleInfo, BattleRunner, BattleRunnerError, ExecutionResult, GroupInfo,
};

// Army composition and rules data access.
pub use composition::{ArmyBuilder, RosterEntry, DEFAULT_QUANTITY};
pub use prefab_armies::{
    create_army_from_prefab, get_prefab_armies, get_prefab_army, validate_prefab_armies,
    PrefabArmy,
};
pub use rules::Rules;

// Crate-specific error and result types.
pub use errors::{
    CompositionError, CompositionResult, EngineError, EngineResult, RulesError, RulesResult,
};

// Battleline Schema - Shared type definitions
// This crate contains all the core enums and types that are shared between
// the main battleline crate and its rules data files, so that balance tables
// can be edited and loaded without touching engine code.

// Re-export the main types
pub use rules_data::*;
pub use troop::*;

// Iteration over troop kinds is part of the schema surface.
pub use strum::IntoEnumIterator;

pub mod rules_data;
pub mod troop;

use crate::battle::state::{Army, TroopGroup};
use crate::errors::{CompositionError, CompositionResult};
use crate::rules::Rules;
use schema::{ArmyBuffs, IntoEnumIterator, TroopType, TIER_COUNT};
use serde::{Deserialize, Serialize};

/// Default unit count for freshly seeded roster entries.
pub const DEFAULT_QUANTITY: u32 = 1000;

/// One roster row: a troop kind and tier with the unit count to field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub kind: TroopType,
    pub tier: u8,
    pub quantity: u32,
}

/// Builds an [`Army`] from a roster of kind/tier/quantity rows plus
/// army-wide buffs.
///
/// `new()` seeds the full grid (every kind at every tier), the shape army
/// setup forms work with; `empty()` starts from nothing for hand-built
/// rosters. Rows left at quantity zero are dropped when the army is built.
#[derive(Debug, Clone)]
pub struct ArmyBuilder {
    entries: Vec<RosterEntry>,
    buffs: ArmyBuffs,
}

impl ArmyBuilder {
    /// Full roster grid: every kind, tiers 1..=16, default quantity.
    pub fn new() -> Self {
        let mut entries = Vec::new();
        for kind in TroopType::iter() {
            for tier in 1..=TIER_COUNT as u8 {
                entries.push(RosterEntry {
                    kind,
                    tier,
                    quantity: DEFAULT_QUANTITY,
                });
            }
        }
        Self {
            entries,
            buffs: ArmyBuffs::default(),
        }
    }

    /// Empty roster for hand-built armies.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            buffs: ArmyBuffs::default(),
        }
    }

    /// Set every row in the roster to `quantity`.
    pub fn fill_all(&mut self, quantity: u32) -> &mut Self {
        for entry in &mut self.entries {
            entry.quantity = quantity;
        }
        self
    }

    /// Set every row of one kind to `quantity`.
    pub fn fill_kind(&mut self, kind: TroopType, quantity: u32) -> &mut Self {
        for entry in self.entries.iter_mut().filter(|entry| entry.kind == kind) {
            entry.quantity = quantity;
        }
        self
    }

    /// Set the quantity of one kind/tier row, adding the row if the roster
    /// does not have it yet.
    pub fn set_quantity(
        &mut self,
        kind: TroopType,
        tier: u8,
        quantity: u32,
    ) -> CompositionResult<()> {
        if tier == 0 || tier as usize > TIER_COUNT {
            return Err(CompositionError::InvalidTier(tier));
        }
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.kind == kind && entry.tier == tier)
        {
            Some(entry) => entry.quantity = quantity,
            None => self.entries.push(RosterEntry {
                kind,
                tier,
                quantity,
            }),
        }
        Ok(())
    }

    /// Set the army-wide buffs.
    pub fn buffs(&mut self, buffs: ArmyBuffs) -> &mut Self {
        self.buffs = buffs;
        self
    }

    /// Resolve every row against the rules and assemble the army.
    /// Rows with quantity zero are dropped; the rest get their attributes
    /// from their kind and tier. Positions are assigned when a battle starts.
    pub fn build(&self, rules: &Rules) -> CompositionResult<Army> {
        let mut troops = Vec::new();
        for entry in &self.entries {
            let attributes = rules
                .troop_attributes(entry.kind, entry.tier)
                .ok_or(CompositionError::InvalidTier(entry.tier))?;
            if entry.quantity == 0 {
                continue;
            }
            troops.push(TroopGroup {
                kind: entry.kind,
                tier: entry.tier,
                quantity: entry.quantity,
                attributes,
                position: 0,
            });
        }
        Ok(Army {
            troops,
            buffs: self.buffs,
        })
    }
}

impl Default for ArmyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

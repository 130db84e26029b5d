use crate::battle::state::Army;
use crate::composition::{ArmyBuilder, RosterEntry};
use crate::errors::{CompositionError, CompositionResult};
use crate::rules::Rules;
use schema::{TroopType, TIER_COUNT};
use serde::{Deserialize, Serialize};

/// A predefined army configuration for quick battles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefabArmy {
    pub id: String,
    pub name: String,
    pub description: String,
    pub entries: Vec<RosterEntry>,
}

/// Get all available prefab armies for quick battles
pub fn get_prefab_armies() -> Vec<PrefabArmy> {
    vec![
        PrefabArmy {
            id: "border_garrison".to_string(),
            name: "Border Garrison".to_string(),
            description: "Longbow lines behind a thin shield wall, strongest at long range"
                .to_string(),
            entries: vec![
                RosterEntry {
                    kind: TroopType::Archers,
                    tier: 1,
                    quantity: 2000,
                },
                RosterEntry {
                    kind: TroopType::Infantry,
                    tier: 1,
                    quantity: 1500,
                },
            ],
        },
        PrefabArmy {
            id: "siege_train".to_string(),
            name: "Siege Train".to_string(),
            description: "Engine column with a marching escort that wants the fight at maximum range"
                .to_string(),
            entries: vec![
                RosterEntry {
                    kind: TroopType::Siege,
                    tier: 1,
                    quantity: 1500,
                },
                RosterEntry {
                    kind: TroopType::Infantry,
                    tier: 1,
                    quantity: 3000,
                },
            ],
        },
        PrefabArmy {
            id: "steppe_horde".to_string(),
            name: "Steppe Horde".to_string(),
            description: "Fast riders that close the gap quickly and punish infantry lines"
                .to_string(),
            entries: vec![
                RosterEntry {
                    kind: TroopType::Cavalry,
                    tier: 2,
                    quantity: 2500,
                },
                RosterEntry {
                    kind: TroopType::Cavalry,
                    tier: 1,
                    quantity: 1500,
                },
                RosterEntry {
                    kind: TroopType::Archers,
                    tier: 1,
                    quantity: 1200,
                },
            ],
        },
        PrefabArmy {
            id: "royal_retinue".to_string(),
            name: "Royal Retinue".to_string(),
            description: "Late-campaign elites that roll over frontier garrisons".to_string(),
            entries: vec![
                RosterEntry {
                    kind: TroopType::Cavalry,
                    tier: 16,
                    quantity: 1200,
                },
                RosterEntry {
                    kind: TroopType::Infantry,
                    tier: 16,
                    quantity: 1200,
                },
            ],
        },
    ]
}

/// Get a specific prefab army by ID
pub fn get_prefab_army(army_id: &str) -> Option<PrefabArmy> {
    get_prefab_armies()
        .into_iter()
        .find(|army| army.id == army_id)
}

/// Convert a prefab army into an Army for use in battles
pub fn create_army_from_prefab(army_id: &str, rules: &Rules) -> CompositionResult<Army> {
    let prefab = get_prefab_army(army_id)
        .ok_or_else(|| CompositionError::UnknownPrefab(army_id.to_string()))?;

    let mut builder = ArmyBuilder::empty();
    for entry in &prefab.entries {
        builder.set_quantity(entry.kind, entry.tier, entry.quantity)?;
    }

    builder.build(rules)
}

/// Validate that all prefab armies are properly configured
pub fn validate_prefab_armies() -> Result<(), String> {
    let armies = get_prefab_armies();

    if armies.is_empty() {
        return Err("No prefab armies defined".to_string());
    }

    for army in &armies {
        if army.entries.is_empty() {
            return Err(format!("Army '{}' has no troops", army.id));
        }

        for (i, entry) in army.entries.iter().enumerate() {
            if entry.tier == 0 || entry.tier as usize > TIER_COUNT {
                return Err(format!(
                    "Army '{}' entry {} has invalid tier {}",
                    army.id, i, entry.tier
                ));
            }

            if entry.quantity == 0 {
                return Err(format!("Army '{}' entry {} has no units", army.id, i));
            }
        }
    }

    Ok(())
}

use crate::errors::{RulesError, RulesResult};
use schema::{IntoEnumIterator, RulesData, TierCurve, TroopAttributes, TroopType, TIER_COUNT};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Validated balance tables. Construction checks that every troop kind has
/// complete entries, so lookups by kind cannot miss afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    data: RulesData,
}

impl Rules {
    /// Wraps raw rules data after checking it is complete.
    pub fn new(data: RulesData) -> RulesResult<Rules> {
        let kind_count = TroopType::iter().count();
        for kind in TroopType::iter() {
            if !data.base_stats.contains_key(&kind) {
                return Err(RulesError::MissingBaseStats(kind));
            }
            let curve = data
                .tier_curves
                .get(&kind)
                .ok_or(RulesError::MissingTierCurve(kind))?;
            if curve.attack.len() != TIER_COUNT
                || curve.defense.len() != TIER_COUNT
                || curve.hp.len() != TIER_COUNT
            {
                return Err(RulesError::IncompleteTierCurve(kind));
            }
            let priority = data
                .target_priority
                .get(&kind)
                .ok_or(RulesError::MissingTargetPriority(kind))?;
            if priority.len() != kind_count || TroopType::iter().any(|k| !priority.contains(&k)) {
                return Err(RulesError::InvalidTargetPriority(kind));
            }
        }
        if data.siege_ranges.len() != TIER_COUNT {
            return Err(RulesError::IncompleteSiegeRanges(data.siege_ranges.len()));
        }
        Ok(Rules { data })
    }

    /// Parses rules from RON text.
    pub fn from_ron_str(content: &str) -> RulesResult<Rules> {
        let data: RulesData =
            ron::from_str(content).map_err(|e| RulesError::Parse(e.to_string()))?;
        Rules::new(data)
    }

    /// Loads `rules.ron` from the data directory.
    pub fn load(data_path: &Path) -> RulesResult<Rules> {
        let path = data_path.join("rules.ron");
        let content = fs::read_to_string(&path)
            .map_err(|e| RulesError::Io(format!("{}: {}", path.display(), e)))?;
        Rules::from_ron_str(&content)
    }

    /// The balance tables shipped with the engine, mirroring `data/rules.ron`.
    pub fn standard() -> Rules {
        // The tables below are complete; new() re-checks them in tests.
        Rules {
            data: standard_data(),
        }
    }

    /// Length of the battlefield axis. Positions run from 0 to this value.
    pub fn battlefield_width(&self) -> u32 {
        self.data.battlefield_width
    }

    /// Target kind preference for an attacking kind, most preferred first.
    pub fn target_priority(&self, kind: TroopType) -> &[TroopType] {
        &self.data.target_priority[&kind]
    }

    /// Siege engine range at a tier. None if the tier is outside 1..=16.
    pub fn siege_range(&self, tier: u8) -> Option<u32> {
        if tier == 0 {
            return None;
        }
        self.data.siege_ranges.get(tier as usize - 1).copied()
    }

    /// Resolved per-unit attributes for a troop kind at a tier. None if the
    /// tier is outside 1..=16. `speed` comes from the baseline, `range` from
    /// the baseline (siege from the per-tier range table) and the scaling
    /// stats from the tier curve.
    pub fn troop_attributes(&self, kind: TroopType, tier: u8) -> Option<TroopAttributes> {
        if tier == 0 || tier as usize > TIER_COUNT {
            return None;
        }
        let index = tier as usize - 1;
        let base = self.data.base_stats[&kind];
        let curve = &self.data.tier_curves[&kind];
        let range = match kind {
            TroopType::Siege => self.data.siege_ranges[index],
            _ => base.range,
        };
        Some(TroopAttributes {
            attack: curve.attack[index],
            defense: curve.defense[index],
            hp: curve.hp[index],
            speed: base.speed,
            range,
        })
    }
}

fn standard_data() -> RulesData {
    RulesData {
        battlefield_width: 1500,
        base_stats: HashMap::from([
            (
                TroopType::Infantry,
                TroopAttributes {
                    attack: 10,
                    defense: 15,
                    hp: 100,
                    speed: 350,
                    range: 50,
                },
            ),
            (
                TroopType::Archers,
                TroopAttributes {
                    attack: 15,
                    defense: 8,
                    hp: 80,
                    speed: 100,
                    range: 500,
                },
            ),
            (
                TroopType::Cavalry,
                TroopAttributes {
                    attack: 20,
                    defense: 10,
                    hp: 90,
                    speed: 300,
                    range: 50,
                },
            ),
            (
                TroopType::Siege,
                TroopAttributes {
                    attack: 30,
                    defense: 5,
                    hp: 70,
                    speed: 75,
                    range: 300,
                },
            ),
        ]),
        tier_curves: HashMap::from([
            (
                TroopType::Infantry,
                TierCurve {
                    attack: vec![
                        100, 140, 190, 260, 350, 470, 630, 850, 1150, 1550, 1940, 2425, 2910,
                        3570, 4230, 4920,
                    ],
                    defense: vec![
                        300, 410, 550, 740, 1000, 1350, 1820, 2460, 3320, 4480, 5600, 7000, 8400,
                        10330, 11760, 13670,
                    ],
                    hp: vec![
                        600, 810, 1090, 1470, 1980, 2670, 3600, 4860, 6560, 8860, 11080, 13850,
                        16620, 20440, 24260, 28240,
                    ],
                },
            ),
            (
                TroopType::Archers,
                TierCurve {
                    attack: vec![
                        130, 180, 240, 320, 430, 580, 780, 1050, 1420, 1920, 2400, 3000, 3450,
                        4070, 4690, 5460,
                    ],
                    defense: vec![
                        100, 140, 190, 260, 350, 470, 630, 850, 1150, 1550, 1940, 2425, 2780,
                        3280, 3780, 4390,
                    ],
                    hp: vec![
                        250, 340, 460, 620, 840, 1130, 1530, 2070, 2790, 3770, 4720, 5900, 6780,
                        8000, 9220, 10730,
                    ],
                },
            ),
            (
                TroopType::Cavalry,
                TierCurve {
                    attack: vec![
                        220, 300, 410, 550, 740, 1000, 1350, 1820, 2460, 3320, 4150, 5187, 5800,
                        6670, 7540, 8780,
                    ],
                    defense: vec![
                        150, 200, 270, 360, 490, 660, 890, 1200, 1620, 2190, 2740, 3425, 3830,
                        4400, 4970, 5780,
                    ],
                    hp: vec![
                        400, 540, 730, 990, 1340, 1810, 2440, 3290, 4440, 5990, 7490, 9362, 10480,
                        12050, 13620, 15850,
                    ],
                },
            ),
            (
                TroopType::Siege,
                TierCurve {
                    attack: vec![
                        100, 140, 190, 260, 350, 470, 630, 850, 1150, 1550, 1940, 2425, 2780,
                        3280, 3780, 4400,
                    ],
                    defense: vec![
                        50, 70, 90, 120, 160, 220, 300, 410, 550, 740, 930, 1162, 1330, 1560,
                        1790, 2080,
                    ],
                    hp: vec![
                        100, 140, 190, 260, 350, 470, 630, 850, 1150, 1550, 1940, 2425, 2780,
                        3280, 3780, 4400,
                    ],
                },
            ),
        ]),
        target_priority: HashMap::from([
            (
                TroopType::Infantry,
                vec![
                    TroopType::Archers,
                    TroopType::Infantry,
                    TroopType::Siege,
                    TroopType::Cavalry,
                ],
            ),
            (
                TroopType::Archers,
                vec![
                    TroopType::Cavalry,
                    TroopType::Archers,
                    TroopType::Siege,
                    TroopType::Infantry,
                ],
            ),
            (
                TroopType::Cavalry,
                vec![
                    TroopType::Infantry,
                    TroopType::Cavalry,
                    TroopType::Siege,
                    TroopType::Archers,
                ],
            ),
            (
                TroopType::Siege,
                vec![
                    TroopType::Siege,
                    TroopType::Archers,
                    TroopType::Cavalry,
                    TroopType::Infantry,
                ],
            ),
        ]),
        siege_ranges: vec![
            300, 350, 400, 450, 500, 550, 600, 650, 700, 750, 800, 850, 900, 950, 1000, 1050,
        ],
    }
}

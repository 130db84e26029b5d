use schema::{ArmyBuffs, TroopAttributes, TroopType};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Copy)]
pub enum GameState {
    InProgress,
    Army1Win,
    Army2Win,
    Draw,
}

impl GameState {
    /// True once the battle has been decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// Index of the winning army (0 or 1), if there is one.
    pub fn winner(&self) -> Option<usize> {
        match self {
            GameState::Army1Win => Some(0),
            GameState::Army2Win => Some(1),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Round Management
    RoundStarted {
        round: u32,
    },

    // Combat
    AttackLanded {
        attacker_kind: TroopType,
        attacker_tier: u8,
        killed: u32,
        target_kind: TroopType,
        target_tier: u8,
    },

    // Roster Changes
    GroupDestroyed {
        army_index: usize,
        kind: TroopType,
        tier: u8,
    },

    // Battle End
    BattleEnded {
        winner: Option<usize>,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            // === Round Management Events ===
            BattleEvent::RoundStarted { round } => Some(format!("=== Round {} ===", round)),

            // === Combat Events ===
            BattleEvent::AttackLanded {
                attacker_kind,
                attacker_tier,
                killed,
                target_kind,
                target_tier,
            } => Some(format!(
                "{} T{} killed {} {} T{}",
                attacker_kind, attacker_tier, killed, target_kind, target_tier
            )),

            // === Roster Events ===
            BattleEvent::GroupDestroyed {
                army_index,
                kind,
                tier,
            } => Some(format!(
                "Army {}'s {} T{} was wiped out!",
                army_index + 1,
                kind,
                tier
            )),

            // === Battle End Events ===
            BattleEvent::BattleEnded { winner } => match winner {
                Some(index) => Some(format!("Army {} has won the battle!", index + 1)),
                None => Some("The battle ended in a draw!".to_string()),
            },
        }
    }
}


/// Event bus for collecting and managing battle events.
///
/// ## Usage Examples
///
/// ```rust,ignore
/// // Basic debug printing
/// event_bus.print_debug();                                // Just print events
/// event_bus.print_debug_with_message("Round 1 events:");  // With header message
/// event_bus.print_formatted();                            // Human-readable format
/// event_bus.print_formatted_with_message("Battle log:");  // With header
///
/// // Using Display trait
/// println!("{}", event_bus);                              // Print all events
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        self.print_debug();
    }

    /// Print all events using their formatted text (when available).
    /// Falls back to debug format for silent events.
    pub fn print_formatted(&self) {
        for event in &self.events {
            match event.format() {
                Some(formatted) => println!("  {}", formatted),
                None => println!("  {:?} (silent)", event),
            }
        }
    }

    /// Print all events using their formatted text with a custom prefix message.
    pub fn print_formatted_with_message(&self, message: &str) {
        println!("{}", message);
        self.print_formatted();
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Format the EventBus for printing. Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// A block of identical units fighting as one: same kind, tier, per-unit
/// attributes and a shared position on the battlefield axis.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TroopGroup {
    pub kind: TroopType,
    pub tier: u8,
    pub quantity: u32,
    pub attributes: TroopAttributes,
    pub position: u32,
}

impl TroopGroup {
    /// Absolute distance to another group along the battlefield axis.
    pub fn distance_to(&self, other: &TroopGroup) -> u32 {
        self.position.abs_diff(other.position)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Army {
    pub troops: Vec<TroopGroup>,
    pub buffs: ArmyBuffs,
}

impl Army {
    pub fn new(troops: Vec<TroopGroup>) -> Self {
        Self {
            troops,
            buffs: ArmyBuffs::default(),
        }
    }

    /// Total units across all groups.
    pub fn unit_count(&self) -> u64 {
        self.troops
            .iter()
            .map(|group| u64::from(group.quantity))
            .sum()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleState {
    pub army1: Army,
    pub army2: Army,
    pub round: u32,
    pub battle_log: Vec<String>,
    pub battlefield_width: u32,
}

impl BattleState {
    /// Starts a battle: army 1 lines up at position 0, army 2 at the far
    /// edge, with the round counter at zero and an empty log.
    pub fn new(army1: Army, army2: Army, battlefield_width: u32) -> Self {
        Self {
            army1: place_at(army1, 0),
            army2: place_at(army2, battlefield_width),
            round: 0,
            battle_log: Vec::new(),
            battlefield_width,
        }
    }

    /// True once either side has no groups left. An army that starts empty
    /// makes the battle over before any round runs.
    pub fn is_battle_over(&self) -> bool {
        self.army1.troops.is_empty() || self.army2.troops.is_empty()
    }

    /// Classifies the current state. Both sides wiped out in the same round
    /// is a draw.
    pub fn outcome(&self) -> GameState {
        match (self.army1.troops.is_empty(), self.army2.troops.is_empty()) {
            (true, true) => GameState::Draw,
            (false, true) => GameState::Army1Win,
            (true, false) => GameState::Army2Win,
            (false, false) => GameState::InProgress,
        }
    }
}

fn place_at(army: Army, position: u32) -> Army {
    Army {
        troops: army
            .troops
            .into_iter()
            .map(|group| TroopGroup { position, ..group })
            .collect(),
        buffs: army.buffs,
    }
}

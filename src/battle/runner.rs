use crate::battle::engine::simulate_round;
use crate::battle::state::{Army, BattleEvent, BattleState, GameState};
use crate::rules::Rules;
use schema::TroopType;

/// High-level battle management interface that wraps the round engine
/// Keeps every simulated round as a snapshot, so callers can step the view
/// forward through the simulation and back through earlier rounds without
/// ever recomputing them.
#[derive(Debug)]
pub struct BattleRunner {
    rules: Rules,
    history: Vec<BattleState>,
    cursor: usize,
    accumulated_events: Vec<BattleEvent>,
}

/// Information about the current battle state for API queries
#[derive(Debug, Clone)]
pub struct BattleInfo {
    pub round: u32,
    pub game_state: GameState,
    pub armies: Vec<ArmyInfo>,
}

/// Information about one army in the battle
#[derive(Debug, Clone)]
pub struct ArmyInfo {
    pub groups: Vec<GroupInfo>,
    pub group_count: usize,
    pub unit_count: u64,
}

/// Information about a troop group for API queries
#[derive(Debug, Clone)]
pub struct GroupInfo {
    pub kind: TroopType,
    pub tier: u8,
    pub quantity: u32,
    pub position: u32,
}

/// Result of executing one or more battle rounds
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub events: Vec<BattleEvent>,
    pub new_game_state: GameState,
    pub battle_ended: bool,
    pub winner: Option<usize>,
}

/// Errors that can occur when using the battle runner
#[derive(Debug, Clone, PartialEq)]
pub enum BattleRunnerError {
    BattleAlreadyOver,
    NoSuchRound(usize),
}

impl BattleRunner {
    /// Create a new battle runner with the given armies
    /// Both armies are placed on the rules' battlefield and the starting
    /// position becomes round zero of the history.
    pub fn new(rules: Rules, army1: Army, army2: Army) -> Self {
        let width = rules.battlefield_width();
        let initial = BattleState::new(army1, army2, width);

        Self {
            rules,
            history: vec![initial],
            cursor: 0,
            accumulated_events: Vec::new(),
        }
    }

    /// Simulate the next round from the newest snapshot and append it to
    /// the history. The view moves to the new round.
    pub fn advance_round(&mut self) -> Result<ExecutionResult, BattleRunnerError> {
        if self.is_battle_ended() {
            return Err(BattleRunnerError::BattleAlreadyOver);
        }

        let (new_state, event_bus) = simulate_round(self.latest_state(), &self.rules);
        let events = event_bus.events().to_vec();

        // Store events for later retrieval
        self.accumulated_events.extend(events.clone());

        let result = ExecutionResult {
            events,
            new_game_state: new_state.outcome(),
            battle_ended: new_state.is_battle_over(),
            winner: new_state.outcome().winner(),
        };

        self.history.push(new_state);
        self.cursor = self.history.len() - 1;

        Ok(result)
    }

    /// Step the view forward one round, simulating a fresh round only when
    /// the view is already at the newest one.
    pub fn next_round(&mut self) -> Result<&BattleState, BattleRunnerError> {
        if self.cursor < self.history.len() - 1 {
            self.cursor += 1;
        } else {
            self.advance_round()?;
        }
        Ok(self.current_state())
    }

    /// Step the view back one round. None when already at round zero.
    pub fn previous_round(&mut self) -> Option<&BattleState> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current_state())
    }

    /// Jump the view to an already-simulated round.
    pub fn go_to_round(&mut self, round: usize) -> Result<&BattleState, BattleRunnerError> {
        if round >= self.history.len() {
            return Err(BattleRunnerError::NoSuchRound(round));
        }
        self.cursor = round;
        Ok(self.current_state())
    }

    /// Simulate rounds from the newest snapshot until the battle ends or
    /// `max_rounds` additional rounds have run. The cap keeps battles that
    /// can no longer kill anything from looping forever.
    pub fn run_to_completion(&mut self, max_rounds: u32) -> ExecutionResult {
        let start = self.accumulated_events.len();
        let mut rounds = 0;
        while !self.is_battle_ended() && rounds < max_rounds {
            match self.advance_round() {
                Ok(_) => rounds += 1,
                Err(_) => break,
            }
        }

        let latest = self.latest_state();
        ExecutionResult {
            events: self.accumulated_events[start..].to_vec(),
            new_game_state: latest.outcome(),
            battle_ended: latest.is_battle_over(),
            winner: latest.outcome().winner(),
        }
    }

    /// Get current battle information for the round the view is on
    pub fn get_battle_info(&self) -> BattleInfo {
        let state = self.current_state();
        let armies = [&state.army1, &state.army2]
            .into_iter()
            .map(|army| {
                let groups: Vec<GroupInfo> = army
                    .troops
                    .iter()
                    .map(|group| GroupInfo {
                        kind: group.kind,
                        tier: group.tier,
                        quantity: group.quantity,
                        position: group.position,
                    })
                    .collect();

                ArmyInfo {
                    group_count: groups.len(),
                    unit_count: army.unit_count(),
                    groups,
                }
            })
            .collect();

        BattleInfo {
            round: state.round,
            game_state: state.outcome(),
            armies,
        }
    }

    /// Check if the battle has ended. This judges the newest simulated
    /// round, not the round the view happens to be on.
    pub fn is_battle_ended(&self) -> bool {
        self.latest_state().is_battle_over()
    }

    /// Get the winner if the battle has ended
    pub fn get_winner(&self) -> Option<usize> {
        self.latest_state().outcome().winner()
    }

    /// Snapshot of the round the view is on.
    pub fn current_state(&self) -> &BattleState {
        &self.history[self.cursor]
    }

    /// Newest simulated snapshot.
    pub fn latest_state(&self) -> &BattleState {
        &self.history[self.history.len() - 1]
    }

    /// Round number the view is on.
    pub fn current_round(&self) -> u32 {
        self.current_state().round
    }

    /// Number of rounds simulated so far.
    pub fn rounds_simulated(&self) -> u32 {
        self.latest_state().round
    }

    /// Get all events that have occurred in the battle so far
    pub fn get_all_events(&self) -> &[BattleEvent] {
        &self.accumulated_events
    }

    /// Get events since a certain index (for incremental updates)
    pub fn get_events_since(&self, index: usize) -> &[BattleEvent] {
        if index < self.accumulated_events.len() {
            &self.accumulated_events[index..]
        } else {
            &[]
        }
    }

    /// Clear accumulated events (useful for memory management in long battles)
    pub fn clear_event_history(&mut self) {
        self.accumulated_events.clear();
    }
}

impl std::fmt::Display for BattleRunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleRunnerError::BattleAlreadyOver => write!(f, "Battle has already ended"),
            BattleRunnerError::NoSuchRound(round) => write!(f, "No simulated round {}", round),
        }
    }
}

impl std::error::Error for BattleRunnerError {}

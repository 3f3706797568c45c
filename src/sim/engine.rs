use serde::Serialize;
use tracing::{debug, info, warn};

use super::config::GameConfig;
use super::context::TurnContext;
use super::pacing::{NoPacing, PacePoint, Pacing, SleepPacing};
use super::policy::choose_action;
use super::random::{RandomSource, SeededRandom};
use super::resolve::{Resolution, execute_action, settle_income};
use super::signal::Signal;
use super::snapshot::Snapshot;
use crate::error::EngineError;
use crate::model::action::lookup;
use crate::model::world::PLAYER_ID;
use crate::model::{Action, ActionId, KingdomId, LogCategory, LogEntry, World};

/// Where the engine is within a turn.
///
/// `Idle` is the only state that accepts player input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TurnPhase {
    #[default]
    Idle,
    ResolvingPlayer,
    ResolvingComputer { kingdom: KingdomId },
    SettlingIncome,
}

/// One computer kingdom's part of a turn. `action` is `None` when it waited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputerTurn {
    pub kingdom: KingdomId,
    pub action: Option<ActionId>,
    pub resolution: Option<Resolution>,
}

/// Summary of a completed turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// The turn number that was resolved (the counter is now one higher).
    pub turn: u32,
    pub player_action: ActionId,
    pub player_resolution: Resolution,
    pub computer_turns: Vec<ComputerTurn>,
    /// Log entries appended during this turn, in order.
    pub entries: Vec<LogEntry>,
}

pub type Observer = Box<dyn FnMut(&Snapshot)>;

/// The turn-resolution engine.
///
/// Owns the world and drives one full turn per accepted player action:
/// the player, then each computer kingdom by ascending id, then income
/// settlement, then the turn counter. Observers get a [`Snapshot`] after
/// every step.
pub struct Game {
    config: GameConfig,
    world: World,
    phase: TurnPhase,
    selected_action: Option<ActionId>,
    rng: Box<dyn RandomSource>,
    pacing: Box<dyn Pacing>,
    signals: Vec<Signal>,
    observers: Vec<Observer>,
}

impl Game {
    /// Seeded game. Pauses between steps only if `config.pace` is set.
    pub fn new(config: GameConfig) -> Self {
        let pacing: Box<dyn Pacing> = match config.pace {
            Some(pace) => Box::new(SleepPacing::new(pace)),
            None => Box::new(NoPacing),
        };
        Self::with_parts(
            config,
            World::new_game(),
            Box::new(SeededRandom::new(config.seed)),
            pacing,
        )
    }

    pub fn with_parts(
        config: GameConfig,
        world: World,
        rng: Box<dyn RandomSource>,
        pacing: Box<dyn Pacing>,
    ) -> Self {
        Self {
            config,
            world,
            phase: TurnPhase::Idle,
            selected_action: None,
            rng,
            pacing,
            signals: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn turn(&self) -> u32 {
        self.world.turn
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_processing(&self) -> bool {
        self.phase != TurnPhase::Idle
    }

    pub fn set_pacing(&mut self, pacing: Box<dyn Pacing>) {
        self.pacing = pacing;
    }

    /// Register a callback that receives a snapshot after every state change.
    pub fn subscribe(&mut self, observer: impl FnMut(&Snapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Take the transient cues emitted since the last call.
    ///
    /// The buffer only holds the most recent accepted turn's cues plus any
    /// rejection cues raised after it: it is cleared when a turn starts.
    pub fn drain_signals(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            turn: self.world.turn,
            processing: self.is_processing(),
            phase: self.phase,
            selected_action: self.selected_action,
            kingdoms: self.world.kingdoms().to_vec(),
            log: self.world.log.entries().to_vec(),
        }
    }

    /// Discard all state and start over with the opening kingdoms and log.
    ///
    /// The random source keeps its position, so a restart plays differently.
    pub fn init_game(&mut self) {
        self.world = World::new_game();
        self.phase = TurnPhase::Idle;
        self.selected_action = None;
        self.signals.clear();
        info!("new game started");
        self.notify();
    }

    /// Resolve one full turn starting with the player's `action_id`.
    ///
    /// Rejected without any state change when a turn is in progress, the id
    /// is not in the catalog, or the player cannot pay the cost. The last case
    /// also emits [`Signal::InsufficientResources`].
    pub fn submit_player_action(
        &mut self,
        action_id: ActionId,
    ) -> Result<TurnReport, EngineError> {
        if self.is_processing() {
            warn!(action_id, phase = ?self.phase, "input rejected while turn in progress");
            return Err(EngineError::Busy);
        }
        let action = lookup(action_id)?;
        if !self.world.player().can_afford(action.cost) {
            warn!(action = action.name, "player cannot afford action");
            self.signals.push(Signal::InsufficientResources { action: action_id });
            self.notify();
            return Err(EngineError::UnaffordableAction {
                kingdom: PLAYER_ID,
                action: action_id,
            });
        }

        self.signals.clear();
        self.selected_action = Some(action_id);
        let report = self.run_turn(action);
        self.phase = TurnPhase::Idle;
        self.selected_action = None;
        self.notify();
        report
    }

    fn run_turn(&mut self, action: &'static Action) -> Result<TurnReport, EngineError> {
        let turn = self.world.turn;
        let log_start = self.world.log.len();
        info!(turn, action = action.name, "turn started");

        self.phase = TurnPhase::ResolvingPlayer;
        let player_resolution = execute_action(&mut self.context(), PLAYER_ID, action)?;
        self.notify();

        let mut computer_turns = Vec::new();
        for kingdom in self.world.computer_ids() {
            self.pacing.pause(PacePoint::BeforeComputer { kingdom });
            self.phase = TurnPhase::ResolvingComputer { kingdom };
            computer_turns.push(self.resolve_computer(kingdom)?);
            self.notify();
        }

        self.pacing.pause(PacePoint::BeforeIncome);
        self.phase = TurnPhase::SettlingIncome;
        settle_income(&mut self.context());
        self.notify();

        self.world.turn += 1;
        info!(turn, next = self.world.turn, "turn resolved");

        Ok(TurnReport {
            turn,
            player_action: action.id,
            player_resolution,
            computer_turns,
            entries: self.world.log.since(log_start).to_vec(),
        })
    }

    fn resolve_computer(&mut self, kingdom: KingdomId) -> Result<ComputerTurn, EngineError> {
        let current = self
            .world
            .kingdom(kingdom)
            .ok_or(EngineError::UnknownKingdom(kingdom))?;
        // Raid and Alliance cost nothing, so with the fixed catalog the policy
        // always returns an action and this branch is unreachable.
        let Some(action) = choose_action(current, self.rng.as_mut()) else {
            let name = current.name.clone();
            self.world
                .log_event(format!("{name} waits (No resources)."), LogCategory::Info);
            debug!(kingdom = %name, "no affordable action");
            return Ok(ComputerTurn {
                kingdom,
                action: None,
                resolution: None,
            });
        };

        let resolution = execute_action(&mut self.context(), kingdom, action)?;
        Ok(ComputerTurn {
            kingdom,
            action: Some(action.id),
            resolution: Some(resolution),
        })
    }

    fn context(&mut self) -> TurnContext<'_> {
        TurnContext {
            world: &mut self.world,
            rng: self.rng.as_mut(),
            signals: &mut self.signals,
        }
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

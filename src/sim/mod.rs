mod config;
mod context;
mod engine;
mod pacing;
mod policy;
mod random;
mod resolve;
mod signal;
mod snapshot;

pub use config::{GameConfig, PaceConfig};
pub use context::TurnContext;
pub use engine::{ComputerTurn, Game, Observer, TurnPhase, TurnReport};
pub use pacing::{NoPacing, PacePoint, Pacing, SleepPacing};
pub use policy::{affordable_actions, choose_action};
pub use random::{RandomSource, SeededRandom};
pub use resolve::{
    ACTOR_ALLIANCE_BONUS, ALLIANCE_FAILURE_PENALTY, ALLIANCE_SUCCESS_THRESHOLD,
    PARTNER_ALLIANCE_BONUS, Resolution, execute_action, grant_partner_bonus, settle_income,
};
pub use signal::Signal;
pub use snapshot::{Snapshot, Standing};

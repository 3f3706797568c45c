pub mod error;
pub mod model;
pub mod sim;
#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

pub use error::EngineError;
pub use model::{
    Action, ActionId, ActionResult, EventLog, Kingdom, KingdomColor, KingdomId, LogCategory,
    LogEntry, ResourceKind, Resources, World,
};
pub use sim::{Game, GameConfig, Signal, Snapshot, TurnPhase, TurnReport};

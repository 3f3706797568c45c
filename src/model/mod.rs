#[macro_use]
mod macros;

pub mod action;
pub mod event_log;
pub mod kingdom;
pub mod resource;
pub mod world;

pub use action::{Action, ActionId, ActionResult};
pub use event_log::{EventLog, LogCategory, LogEntry};
pub use kingdom::{Kingdom, KingdomColor, KingdomId};
pub use resource::{ResourceKind, Resources};
pub use world::World;

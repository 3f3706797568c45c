use serde::Serialize;

use crate::model::{ActionId, KingdomId, ResourceKind};

/// A transient cue for the presentation layer (floating text and the like).
///
/// Signals are never written to the durable event log. The engine buffers
/// them until `Game::drain_signals` is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Signal {
    /// The player picked an action it cannot pay for. Nothing changed.
    InsufficientResources { action: ActionId },

    /// A cost or standard effect moved one of the player's resources.
    /// `delta` is the nominal table value, before clamping.
    ResourceChanged {
        kingdom: KingdomId,
        resource: ResourceKind,
        delta: i32,
    },

    /// The player formed an alliance.
    AllianceFormed {
        actor: KingdomId,
        partner: KingdomId,
    },

    /// The player's alliance attempt failed.
    AllianceFailed {
        actor: KingdomId,
        influence_lost: u32,
    },

    /// End-of-turn income credited to the player.
    IncomeSettled {
        kingdom: KingdomId,
        resource: ResourceKind,
        amount: u32,
    },
}

use super::random::RandomSource;
use super::signal::Signal;
use crate::model::World;

/// Mutable state handed to each resolution step of a turn.
///
/// Bundled so resolution functions take one argument instead of three.
pub struct TurnContext<'a> {
    pub world: &'a mut World,
    pub rng: &'a mut dyn RandomSource,
    /// Transient cues emitted while resolving.
    pub signals: &'a mut Vec<Signal>,
}

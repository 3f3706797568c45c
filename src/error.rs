use thiserror::Error;

use crate::model::action::ActionId;
use crate::model::kingdom::KingdomId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("kingdom {kingdom} cannot afford action {action}")]
    UnaffordableAction { kingdom: KingdomId, action: ActionId },
    #[error("no action with id {0}")]
    InvalidActionId(u8),
    #[error("no kingdom with id {0}")]
    UnknownKingdom(KingdomId),
    #[error("kingdom {0} has no one to ally with")]
    NoAlliancePartner(KingdomId),
    #[error("a turn is already being resolved")]
    Busy,
    #[error("unknown resource key: {0}")]
    UnknownResource(String),
    #[error("unknown log category: {0}")]
    UnknownCategory(String),
    #[error("unknown kingdom color: {0}")]
    UnknownColor(String),
}

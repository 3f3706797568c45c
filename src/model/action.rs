//! The fixed action table.
//!
//! Seven actions, each with a resource cost and either a set of resource
//! deltas or the alliance marker. The table is a `static` and never changes
//! while the process runs.

use serde::Serialize;

use super::resource::ResourceKind;
use crate::error::EngineError;

pub type ActionId = u8;

pub const MOBILIZE: ActionId = 1;
pub const RAID: ActionId = 2;
pub const DIPLOMACY: ActionId = 3;
pub const TRADE: ActionId = 4;
pub const BUILD: ActionId = 5;
pub const ESPIONAGE: ActionId = 6;
pub const ALLIANCE: ActionId = 7;

/// What an action does once its cost is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "deltas", rename_all = "snake_case")]
pub enum ActionResult {
    /// Signed per-resource deltas, applied with clamping at zero.
    Deltas(&'static [(ResourceKind, i32)]),
    /// Triggers alliance resolution instead of resource deltas.
    Alliance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Action {
    pub id: ActionId,
    pub name: &'static str,
    pub description: &'static str,
    /// Required amounts. Resources not listed cost nothing.
    pub cost: &'static [(ResourceKind, u32)],
    pub result: ActionResult,
}

impl Action {
    pub fn is_free(&self) -> bool {
        self.cost.iter().all(|&(_, amount)| amount == 0)
    }

    pub fn is_alliance(&self) -> bool {
        matches!(self.result, ActionResult::Alliance)
    }
}

static CATALOG: [Action; 7] = [
    Action {
        id: MOBILIZE,
        name: "Mobilize",
        description: "Prepare your forces for war.",
        cost: &[(ResourceKind::Money, 2)],
        result: ActionResult::Deltas(&[(ResourceKind::Influence, 2)]),
    },
    Action {
        id: RAID,
        name: "Raid",
        description: "Pillage neighboring lands.",
        cost: &[],
        result: ActionResult::Deltas(&[(ResourceKind::Money, 4), (ResourceKind::Influence, -1)]),
    },
    Action {
        id: DIPLOMACY,
        name: "Diplomacy",
        description: "Win hearts and minds.",
        cost: &[(ResourceKind::Money, 1)],
        result: ActionResult::Deltas(&[(ResourceKind::Influence, 3)]),
    },
    Action {
        id: TRADE,
        name: "Trade",
        description: "Open markets for goods.",
        cost: &[(ResourceKind::Influence, 1)],
        result: ActionResult::Deltas(&[(ResourceKind::Money, 3), (ResourceKind::Goods, 1)]),
    },
    Action {
        id: BUILD,
        name: "Build",
        description: "Invest in infrastructure.",
        cost: &[(ResourceKind::Money, 4)],
        result: ActionResult::Deltas(&[(ResourceKind::Goods, 4)]),
    },
    Action {
        id: ESPIONAGE,
        name: "Espionage",
        description: "Steal secrets & influence.",
        cost: &[(ResourceKind::Goods, 1)],
        result: ActionResult::Deltas(&[(ResourceKind::Influence, 2)]),
    },
    Action {
        id: ALLIANCE,
        name: "Alliance",
        description: "Form a strategic bond.",
        cost: &[],
        result: ActionResult::Alliance,
    },
];

/// All actions in ascending id order.
pub fn catalog() -> &'static [Action] {
    &CATALOG
}

pub fn lookup(id: ActionId) -> Result<&'static Action, EngineError> {
    CATALOG
        .iter()
        .find(|a| a.id == id)
        .ok_or(EngineError::InvalidActionId(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_one_through_seven() {
        let ids: Vec<ActionId> = catalog().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn lookup_rejects_out_of_range_ids() {
        assert_eq!(lookup(0), Err(EngineError::InvalidActionId(0)));
        assert_eq!(lookup(8), Err(EngineError::InvalidActionId(8)));
        assert_eq!(lookup(TRADE).map(|a| a.name), Ok("Trade"));
    }

    #[test]
    fn only_alliance_uses_the_marker() {
        let alliances: Vec<&str> = catalog()
            .iter()
            .filter(|a| a.is_alliance())
            .map(|a| a.name)
            .collect();
        assert_eq!(alliances, vec!["Alliance"]);
    }

    #[test]
    fn raid_and_alliance_are_free() {
        let free: Vec<ActionId> = catalog()
            .iter()
            .filter(|a| a.is_free())
            .map(|a| a.id)
            .collect();
        assert_eq!(free, vec![RAID, ALLIANCE]);
    }
}

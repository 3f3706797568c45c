use std::cmp::Reverse;

use serde::Serialize;

use super::engine::TurnPhase;
use crate::model::{ActionId, Kingdom, KingdomId, LogEntry};

/// Everything a renderer needs after a state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub turn: u32,
    /// True while a turn is being resolved; new input is rejected.
    pub processing: bool,
    pub phase: TurnPhase,
    /// The player's action for the turn in progress.
    pub selected_action: Option<ActionId>,
    pub kingdoms: Vec<Kingdom>,
    pub log: Vec<LogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// 1-based.
    pub rank: usize,
    pub kingdom: KingdomId,
    pub name: String,
    pub total: u64,
}

impl Snapshot {
    pub fn player(&self) -> Option<&Kingdom> {
        self.kingdoms.iter().find(|k| k.is_player())
    }

    /// Kingdoms ranked by combined M+I+G, highest first. Ties keep id order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut ranked: Vec<&Kingdom> = self.kingdoms.iter().collect();
        ranked.sort_by_key(|k| (Reverse(k.resources.total()), k.id));
        ranked
            .into_iter()
            .enumerate()
            .map(|(i, k)| Standing {
                rank: i + 1,
                kingdom: k.id,
                name: k.name.clone(),
                total: k.resources.total(),
            })
            .collect()
    }
}

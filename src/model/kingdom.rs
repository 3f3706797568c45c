use serde::{Deserialize, Serialize};

use super::resource::{ResourceKind, Resources};
use crate::error::EngineError;

pub type KingdomId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum KingdomColor {
    Cyan,
    Purple,
    Amber,
    Rose,
}

string_enum!(KingdomColor, EngineError::UnknownColor, {
    Cyan => "cyan",
    Purple => "purple",
    Amber => "amber",
    Rose => "rose",
});

/// One participant and its resource ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kingdom {
    pub id: KingdomId,
    pub name: String,
    pub color: KingdomColor,
    is_player: bool,
    pub resources: Resources,
    /// Added to `resources` at the end of every turn. Only ever grows.
    pub income_buff: Resources,
    /// Partner names, in the order alliances were formed. May repeat.
    pub alliances: Vec<String>,
}

impl Kingdom {
    pub fn new(
        id: KingdomId,
        name: impl Into<String>,
        color: KingdomColor,
        is_player: bool,
        resources: Resources,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            is_player,
            resources,
            income_buff: Resources::ZERO,
            alliances: Vec::new(),
        }
    }

    pub fn is_player(&self) -> bool {
        self.is_player
    }

    /// True when every listed amount is covered. An empty cost is always affordable.
    pub fn can_afford(&self, cost: &[(ResourceKind, u32)]) -> bool {
        cost.iter().all(|&(kind, amount)| self.resources.get(kind) >= amount)
    }

    /// Pay `cost`. Callers check `can_afford` first; the ledger still clamps at zero.
    pub fn apply_cost(&mut self, cost: &[(ResourceKind, u32)]) {
        for &(kind, amount) in cost {
            self.resources.take(kind, amount);
        }
    }

    pub fn apply_effect(&mut self, deltas: &[(ResourceKind, i32)]) {
        for &(kind, delta) in deltas {
            self.resources.adjust(kind, delta);
        }
    }

    /// Add the accumulated income buff to holdings. No-op when the buff is zero.
    pub fn settle_income(&mut self) {
        let buff = self.income_buff;
        self.resources.add(buff);
    }

    pub fn grant_income_buff(&mut self, bonus: Resources) {
        self.income_buff.add(bonus);
    }

    pub fn has_income(&self) -> bool {
        !self.income_buff.is_zero()
    }
}

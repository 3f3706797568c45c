use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the three tradeable resources. The string form is the short key
/// used by the action table (`M`, `I`, `G`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ResourceKind {
    Money,
    Influence,
    Goods,
}

string_enum!(ResourceKind, EngineError::UnknownResource, {
    Money => "M",
    Influence => "I",
    Goods => "G",
});

impl ResourceKind {
    /// Human-readable name for log lines and cues.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Money => "Money",
            ResourceKind::Influence => "Influence",
            ResourceKind::Goods => "Goods",
        }
    }
}

/// A non-negative quantity of each resource.
///
/// Used both for a kingdom's holdings and for its per-turn income buff.
/// Every mutation saturates at zero, so no value is ever negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resources {
    pub money: u32,
    pub influence: u32,
    pub goods: u32,
}

impl Resources {
    pub const ZERO: Resources = Resources::new(0, 0, 0);

    pub const fn new(money: u32, influence: u32, goods: u32) -> Self {
        Self {
            money,
            influence,
            goods,
        }
    }

    pub fn get(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Money => self.money,
            ResourceKind::Influence => self.influence,
            ResourceKind::Goods => self.goods,
        }
    }

    fn slot(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Money => &mut self.money,
            ResourceKind::Influence => &mut self.influence,
            ResourceKind::Goods => &mut self.goods,
        }
    }

    /// Add a signed delta, clamping at zero. Returns the change actually applied.
    pub fn adjust(&mut self, kind: ResourceKind, delta: i32) -> i64 {
        let slot = self.slot(kind);
        let before = *slot;
        *slot = before.saturating_add_signed(delta);
        i64::from(*slot) - i64::from(before)
    }

    /// Subtract `amount`, clamping at zero. Returns the amount actually removed.
    pub fn take(&mut self, kind: ResourceKind, amount: u32) -> u32 {
        let slot = self.slot(kind);
        let removed = amount.min(*slot);
        *slot -= removed;
        removed
    }

    /// Component-wise saturating addition.
    pub fn add(&mut self, other: Resources) {
        for (kind, amount) in other.iter() {
            let slot = self.slot(kind);
            *slot = slot.saturating_add(amount);
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Resources::ZERO
    }

    /// Combined holdings across all three resources.
    pub fn total(&self) -> u64 {
        u64::from(self.money) + u64::from(self.influence) + u64::from(self.goods)
    }

    /// Iterate `(kind, amount)` in M, I, G order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, u32)> + '_ {
        ResourceKind::ALL.iter().map(move |&kind| (kind, self.get(kind)))
    }
}

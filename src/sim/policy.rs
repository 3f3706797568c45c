use super::random::RandomSource;
use crate::model::action::catalog;
use crate::model::{Action, Kingdom};

/// Actions `kingdom` can currently pay for, in catalog order.
pub fn affordable_actions(kingdom: &Kingdom) -> Vec<&'static Action> {
    catalog()
        .iter()
        .filter(|a| kingdom.can_afford(a.cost))
        .collect()
}

/// Uniform random choice among affordable actions. `None` means the kingdom waits.
///
/// Memoryless: the result depends only on the kingdom's current holdings and
/// the random source.
pub fn choose_action(kingdom: &Kingdom, rng: &mut dyn RandomSource) -> Option<&'static Action> {
    let options = affordable_actions(kingdom);
    if options.is_empty() {
        return None;
    }
    options.get(rng.pick(options.len())).copied()
}

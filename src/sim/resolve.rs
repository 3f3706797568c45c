//! Applying an action's cost and effect to one kingdom, including the
//! alliance roll, plus end-of-turn income settlement.
//!
//! Each call to [`execute_action`] is one atomic step: observers only see the
//! state before the cost is paid or after the effect has landed.

use serde::Serialize;
use tracing::debug;

use super::context::TurnContext;
use super::signal::Signal;
use crate::error::EngineError;
use crate::model::{Action, ActionResult, KingdomId, LogCategory, ResourceKind, Resources, World};

/// An alliance succeeds when the roll is strictly greater than this.
pub const ALLIANCE_SUCCESS_THRESHOLD: f64 = 0.5;
pub const ACTOR_ALLIANCE_BONUS: Resources = Resources::new(3, 1, 2);
pub const PARTNER_ALLIANCE_BONUS: Resources = Resources::new(2, 1, 1);
pub const ALLIANCE_FAILURE_PENALTY: u32 = 3;

/// What happened when an action was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    /// Standard resource deltas were applied.
    Applied,
    AllianceFormed { partner: KingdomId },
    /// `influence_lost` is after clamping at zero.
    AllianceFailed { influence_lost: u32 },
}

/// Pay `action`'s cost for `actor` and resolve its effect.
///
/// Affordability is the caller's concern: the engine checks it for the player
/// and the decision policy only offers affordable actions.
pub fn execute_action(
    ctx: &mut TurnContext,
    actor: KingdomId,
    action: &Action,
) -> Result<Resolution, EngineError> {
    let kingdom = ctx
        .world
        .kingdom_mut(actor)
        .ok_or(EngineError::UnknownKingdom(actor))?;
    kingdom.apply_cost(action.cost);
    let is_player = kingdom.is_player();
    if is_player {
        for &(resource, amount) in action.cost {
            ctx.signals.push(Signal::ResourceChanged {
                kingdom: actor,
                resource,
                delta: -(amount as i32),
            });
        }
    }

    match action.result {
        ActionResult::Deltas(deltas) => {
            kingdom.apply_effect(deltas);
            let name = kingdom.name.clone();
            if is_player {
                for &(resource, delta) in deltas {
                    ctx.signals.push(Signal::ResourceChanged {
                        kingdom: actor,
                        resource,
                        delta,
                    });
                }
            }
            let category = if is_player {
                LogCategory::Player
            } else {
                LogCategory::Enemy
            };
            ctx.world
                .log_event(format!("{name} used {}.", action.name), category);
            debug!(kingdom = %name, action = action.name, "action applied");
            Ok(Resolution::Applied)
        }
        ActionResult::Alliance => resolve_alliance(ctx, actor),
    }
}

/// Pick a partner uniformly among the other kingdoms, then roll once.
fn resolve_alliance(ctx: &mut TurnContext, actor: KingdomId) -> Result<Resolution, EngineError> {
    let partners: Vec<KingdomId> = ctx
        .world
        .kingdoms()
        .iter()
        .map(|k| k.id)
        .filter(|&id| id != actor)
        .collect();
    let index = ctx.rng.pick(partners.len());
    let partner = *partners
        .get(index)
        .ok_or(EngineError::NoAlliancePartner(actor))?;

    let roll = ctx.rng.roll();
    if roll > ALLIANCE_SUCCESS_THRESHOLD {
        form_alliance(ctx, actor, partner)
    } else {
        fail_alliance(ctx, actor)
    }
}

fn form_alliance(
    ctx: &mut TurnContext,
    actor: KingdomId,
    partner: KingdomId,
) -> Result<Resolution, EngineError> {
    let partner_name = ctx
        .world
        .kingdom(partner)
        .ok_or(EngineError::UnknownKingdom(partner))?
        .name
        .clone();
    let kingdom = ctx
        .world
        .kingdom_mut(actor)
        .ok_or(EngineError::UnknownKingdom(actor))?;
    kingdom.grant_income_buff(ACTOR_ALLIANCE_BONUS);
    kingdom.alliances.push(partner_name.clone());
    let actor_name = kingdom.name.clone();
    let is_player = kingdom.is_player();

    grant_partner_bonus(ctx.world, partner)?;

    let category = if is_player {
        LogCategory::Success
    } else {
        LogCategory::Info
    };
    ctx.world.log_event(
        format!("{actor_name} formed an alliance with {partner_name}!"),
        category,
    );
    if is_player {
        ctx.signals.push(Signal::AllianceFormed { actor, partner });
    }
    debug!(actor = %actor_name, partner = %partner_name, "alliance formed");
    Ok(Resolution::AllianceFormed { partner })
}

/// Partner side of a successful alliance.
///
/// Credited directly to the partner's income buff. The partner pays nothing
/// and takes no action of its own.
pub fn grant_partner_bonus(world: &mut World, partner: KingdomId) -> Result<(), EngineError> {
    world
        .kingdom_mut(partner)
        .ok_or(EngineError::UnknownKingdom(partner))?
        .grant_income_buff(PARTNER_ALLIANCE_BONUS);
    Ok(())
}

fn fail_alliance(ctx: &mut TurnContext, actor: KingdomId) -> Result<Resolution, EngineError> {
    let kingdom = ctx
        .world
        .kingdom_mut(actor)
        .ok_or(EngineError::UnknownKingdom(actor))?;
    let influence_lost = kingdom
        .resources
        .take(ResourceKind::Influence, ALLIANCE_FAILURE_PENALTY);
    let name = kingdom.name.clone();
    let is_player = kingdom.is_player();

    ctx.world.log_event(
        format!("{name} alliance failed. Lost {ALLIANCE_FAILURE_PENALTY} Influence."),
        LogCategory::Error,
    );
    if is_player {
        ctx.signals.push(Signal::AllianceFailed {
            actor,
            influence_lost,
        });
    }
    debug!(kingdom = %name, influence_lost, "alliance failed");
    Ok(Resolution::AllianceFailed { influence_lost })
}

/// Credit every kingdom with a non-zero buff. Runs once per turn.
pub fn settle_income(ctx: &mut TurnContext) {
    for kingdom in ctx.world.kingdoms_mut().iter_mut() {
        if !kingdom.has_income() {
            continue;
        }
        kingdom.settle_income();
        if kingdom.is_player() {
            for (resource, amount) in kingdom.income_buff.iter() {
                if amount > 0 {
                    ctx.signals.push(Signal::IncomeSettled {
                        kingdom: kingdom.id,
                        resource,
                        amount,
                    });
                }
            }
        }
        debug!(kingdom = %kingdom.name, buff = ?kingdom.income_buff, "income settled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::action::{ALLIANCE, RAID, TRADE, lookup};
    use crate::model::world::PLAYER_ID;
    use crate::testutil::ScriptedRandom;

    fn run<T>(
        world: &mut World,
        rng: &mut ScriptedRandom,
        f: impl FnOnce(&mut TurnContext) -> T,
    ) -> (T, Vec<Signal>) {
        let mut signals = Vec::new();
        let mut ctx = TurnContext {
            world,
            rng,
            signals: &mut signals,
        };
        let out = f(&mut ctx);
        (out, signals)
    }

    #[test]
    fn trade_pays_cost_then_applies_deltas() {
        let mut world = World::new_game();
        let mut rng = ScriptedRandom::new();
        let action = lookup(TRADE).unwrap();
        let (res, signals) =
            run(&mut world, &mut rng, |ctx| execute_action(ctx, PLAYER_ID, action));
        assert_eq!(res, Ok(Resolution::Applied));
        assert_eq!(world.player().resources, Resources::new(11, 4, 7));
        assert_eq!(world.log.last().unwrap().text, "Northrealm used Trade.");
        assert_eq!(world.log.last().unwrap().category, LogCategory::Player);
        assert_eq!(
            signals,
            vec![
                Signal::ResourceChanged {
                    kingdom: 0,
                    resource: ResourceKind::Influence,
                    delta: -1,
                },
                Signal::ResourceChanged {
                    kingdom: 0,
                    resource: ResourceKind::Money,
                    delta: 3,
                },
                Signal::ResourceChanged {
                    kingdom: 0,
                    resource: ResourceKind::Goods,
                    delta: 1,
                },
            ]
        );
    }

    #[test]
    fn computer_actions_log_as_enemy_without_signals() {
        let mut world = World::new_game();
        let mut rng = ScriptedRandom::new();
        let action = lookup(RAID).unwrap();
        let (res, signals) =
            run(&mut world, &mut rng, |ctx| execute_action(ctx, 2, action));
        assert_eq!(res, Ok(Resolution::Applied));
        assert_eq!(world.kingdom(2).unwrap().resources, Resources::new(16, 4, 6));
        assert_eq!(world.log.last().unwrap().category, LogCategory::Enemy);
        assert!(signals.is_empty());
    }

    #[test]
    fn alliance_success_strictly_above_half() {
        let mut world = World::new_game();
        // partners of 0 are [1, 2, 3]; pick index 1 -> Eastwind
        let mut rng = ScriptedRandom::new().with_picks([1]).with_rolls([0.500_001]);
        let action = lookup(ALLIANCE).unwrap();
        let (res, _) = run(&mut world, &mut rng, |ctx| execute_action(ctx, PLAYER_ID, action));
        assert_eq!(res, Ok(Resolution::AllianceFormed { partner: 2 }));
        assert_eq!(world.player().income_buff, ACTOR_ALLIANCE_BONUS);
        assert_eq!(world.player().alliances, vec!["Eastwind".to_string()]);
        assert_eq!(world.kingdom(2).unwrap().income_buff, PARTNER_ALLIANCE_BONUS);
        let last = world.log.last().unwrap();
        assert_eq!(last.text, "Northrealm formed an alliance with Eastwind!");
        assert_eq!(last.category, LogCategory::Success);
    }

    #[test]
    fn alliance_roll_of_exactly_half_fails() {
        let mut world = World::new_game();
        let mut rng = ScriptedRandom::new().with_picks([0]).with_rolls([0.5]);
        let action = lookup(ALLIANCE).unwrap();
        let (res, signals) =
            run(&mut world, &mut rng, |ctx| execute_action(ctx, PLAYER_ID, action));
        assert_eq!(res, Ok(Resolution::AllianceFailed { influence_lost: 3 }));
        assert_eq!(world.player().resources.influence, 2);
        assert!(world.player().income_buff.is_zero());
        assert!(world.kingdom(1).unwrap().income_buff.is_zero());
        let last = world.log.last().unwrap();
        assert_eq!(last.text, "Northrealm alliance failed. Lost 3 Influence.");
        assert_eq!(last.category, LogCategory::Error);
        assert_eq!(
            signals,
            vec![Signal::AllianceFailed {
                actor: 0,
                influence_lost: 3
            }]
        );
    }

    #[test]
    fn computer_alliance_success_logs_as_info() {
        let mut world = World::new_game();
        // partners of 3 are [0, 1, 2]; pick index 0 -> the player
        let mut rng = ScriptedRandom::new().with_picks([0]).with_rolls([0.9]);
        let action = lookup(ALLIANCE).unwrap();
        let (res, signals) =
            run(&mut world, &mut rng, |ctx| execute_action(ctx, 3, action));
        assert_eq!(res, Ok(Resolution::AllianceFormed { partner: 0 }));
        assert_eq!(world.player().income_buff, PARTNER_ALLIANCE_BONUS);
        assert_eq!(world.log.last().unwrap().category, LogCategory::Info);
        assert!(signals.is_empty());
    }

    #[test]
    fn unknown_actor_is_rejected() {
        let mut world = World::new_game();
        let mut rng = ScriptedRandom::new();
        let action = lookup(RAID).unwrap();
        let (res, _) = run(&mut world, &mut rng, |ctx| execute_action(ctx, 9, action));
        assert_eq!(res, Err(EngineError::UnknownKingdom(9)));
    }

    #[test]
    fn settle_income_only_touches_buffed_kingdoms() {
        let mut world = World::new_game();
        world.kingdoms_mut()[0].grant_income_buff(Resources::new(3, 0, 2));
        let before = world.kingdom(1).unwrap().resources;
        let mut rng = ScriptedRandom::new();
        let ((), signals) = run(&mut world, &mut rng, |ctx| settle_income(ctx));
        assert_eq!(world.player().resources, Resources::new(11, 5, 8));
        assert_eq!(world.kingdom(1).unwrap().resources, before);
        assert_eq!(
            signals,
            vec![
                Signal::IncomeSettled {
                    kingdom: 0,
                    resource: ResourceKind::Money,
                    amount: 3,
                },
                Signal::IncomeSettled {
                    kingdom: 0,
                    resource: ResourceKind::Goods,
                    amount: 2,
                },
            ]
        );
    }
}

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use four_winds::model::Resources;
use four_winds::testutil::ScriptedRandom;
use four_winds::{Game, Snapshot, TurnPhase};

/// Subscribe to `game` and collect every snapshot it publishes.
pub fn record(game: &mut Game) -> Rc<RefCell<Vec<Snapshot>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    game.subscribe(move |s| sink.borrow_mut().push(s.clone()));
    seen
}

/// The snapshot published right after the player's action resolved.
pub fn after_player(snapshots: &[Snapshot]) -> Snapshot {
    snapshots
        .iter()
        .find(|s| s.phase == TurnPhase::ResolvingPlayer)
        .cloned()
        .expect("no player-resolution snapshot recorded")
}

/// Script where every computer kingdom picks the first affordable action
/// (Mobilize for a fresh world) and every roll fails.
pub fn quiet_computers() -> ScriptedRandom {
    ScriptedRandom::new().with_picks([0, 0, 0])
}

pub fn holdings(game: &Game, id: usize) -> Resources {
    game.world().kingdom(id).unwrap().resources
}

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::model::{Resources, World};
use crate::sim::{Game, GameConfig, NoPacing, PacePoint, Pacing, RandomSource};

// ---------------------------------------------------------------------------
// Scripted randomness
// ---------------------------------------------------------------------------

/// Replays queued picks and rolls in order.
///
/// Once a queue runs dry, `pick` returns 0 and `roll` returns 0.0 (which is
/// the failing side of the alliance roll).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
    rolls: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = f64>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    pub fn remaining(&self) -> (usize, usize) {
        (self.picks.len(), self.rolls.len())
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        let next = self.picks.pop_front().unwrap_or(0);
        if len == 0 { 0 } else { next % len }
    }

    fn roll(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Pacing
// ---------------------------------------------------------------------------

/// Records every pause point it is asked to wait at.
#[derive(Debug, Clone, Default)]
pub struct RecordingPacing {
    pub points: Rc<RefCell<Vec<PacePoint>>>,
}

impl Pacing for RecordingPacing {
    fn pause(&mut self, point: PacePoint) {
        self.points.borrow_mut().push(point);
    }
}

// ---------------------------------------------------------------------------
// Game builders
// ---------------------------------------------------------------------------

/// Headless game over a fresh world driven by `rng`.
pub fn scripted_game(rng: ScriptedRandom) -> Game {
    Game::with_parts(
        GameConfig::default(),
        World::new_game(),
        Box::new(rng),
        Box::new(NoPacing),
    )
}

/// Headless game whose player starts with `resources` instead of the usual formula.
pub fn game_with_player_resources(resources: Resources, rng: ScriptedRandom) -> Game {
    let mut world = World::new_game();
    world.kingdoms_mut()[0].resources = resources;
    Game::with_parts(GameConfig::default(), world, Box::new(rng), Box::new(NoPacing))
}

/// Per-kingdom holdings, buffs and alliance counts, for asserting "nothing changed".
pub fn resource_fingerprint(world: &World) -> Vec<(Resources, Resources, usize)> {
    world
        .kingdoms()
        .iter()
        .map(|k| (k.resources, k.income_buff, k.alliances.len()))
        .collect()
}

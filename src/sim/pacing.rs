use std::thread;
use std::time::Duration;

use super::config::PaceConfig;
use crate::model::KingdomId;

/// A point in the turn where a presentation layer may pause for animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacePoint {
    BeforeComputer { kingdom: KingdomId },
    BeforeIncome,
}

/// Hook called at each `PacePoint`. Must not touch game state.
pub trait Pacing {
    fn pause(&mut self, point: PacePoint);
}

/// Headless pacing: never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacing for NoPacing {
    fn pause(&mut self, _point: PacePoint) {}
}

/// Blocks the calling thread for the configured delay.
#[derive(Debug, Clone, Copy)]
pub struct SleepPacing {
    config: PaceConfig,
}

impl SleepPacing {
    pub fn new(config: PaceConfig) -> Self {
        Self { config }
    }

    pub fn delay_for(&self, point: PacePoint) -> Duration {
        let ms = match point {
            PacePoint::BeforeComputer { .. } => self.config.between_ai_ms,
            PacePoint::BeforeIncome => self.config.before_income_ms,
        };
        Duration::from_millis(ms)
    }
}

impl Pacing for SleepPacing {
    fn pause(&mut self, point: PacePoint) {
        let delay = self.delay_for(point);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

use serde::{Deserialize, Serialize};

/// Cosmetic delays between turn steps, in milliseconds.
///
/// Only consulted by `SleepPacing`. State and log ordering are identical with
/// or without pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceConfig {
    /// Delay before each computer kingdom resolves.
    pub between_ai_ms: u64,
    /// Delay before end-of-turn income is settled.
    pub before_income_ms: u64,
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            between_ai_ms: 600,
            before_income_ms: 500,
        }
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// RNG seed for partner choice, alliance rolls and computer decisions.
    pub seed: u64,
    /// If set, pause between turn steps. `None` runs headless.
    pub pace: Option<PaceConfig>,
}

impl GameConfig {
    pub fn new(seed: u64) -> Self {
        Self { seed, pace: None }
    }

    pub fn paced(mut self, pace: PaceConfig) -> Self {
        self.pace = Some(pace);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

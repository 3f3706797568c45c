use super::event_log::{EventLog, LogCategory};
use super::kingdom::{Kingdom, KingdomColor, KingdomId};
use super::resource::Resources;

pub const KINGDOM_NAMES: [&str; 4] = ["Northrealm", "Duskfall", "Eastwind", "Southmarch"];
pub const KINGDOM_COLORS: [KingdomColor; 4] = [
    KingdomColor::Cyan,
    KingdomColor::Purple,
    KingdomColor::Amber,
    KingdomColor::Rose,
];
pub const PLAYER_ID: KingdomId = 0;
pub const OPENING_LINE: &str = "The Age of Four Winds begins. Choose your path wisely.";

/// Starting holdings for the kingdom at `index`: M = 8 + 2·index, I = 5, G = 6.
pub fn starting_resources(index: usize) -> Resources {
    let step = u32::try_from(index).unwrap_or(u32::MAX);
    Resources::new(8u32.saturating_add(step.saturating_mul(2)), 5, 6)
}

/// Complete game state: the four kingdoms, the turn counter and the durable log.
#[derive(Debug, Clone)]
pub struct World {
    kingdoms: Vec<Kingdom>,
    pub turn: u32,
    pub log: EventLog,
}

impl World {
    /// Fresh game: four kingdoms, id 0 is the player, turn 1, one system log entry.
    pub fn new_game() -> Self {
        let kingdoms = KINGDOM_NAMES
            .iter()
            .zip(KINGDOM_COLORS)
            .enumerate()
            .map(|(i, (name, color))| {
                Kingdom::new(i, *name, color, i == PLAYER_ID, starting_resources(i))
            })
            .collect();
        let mut world = Self {
            kingdoms,
            turn: 1,
            log: EventLog::new(),
        };
        world.log_event(OPENING_LINE, LogCategory::System);
        world
    }

    pub fn kingdoms(&self) -> &[Kingdom] {
        &self.kingdoms
    }

    /// Mutable view of every kingdom. A slice, so the roster itself cannot change.
    pub fn kingdoms_mut(&mut self) -> &mut [Kingdom] {
        &mut self.kingdoms
    }

    pub fn kingdom(&self, id: KingdomId) -> Option<&Kingdom> {
        self.kingdoms.get(id)
    }

    pub fn kingdom_mut(&mut self, id: KingdomId) -> Option<&mut Kingdom> {
        self.kingdoms.get_mut(id)
    }

    pub fn player(&self) -> &Kingdom {
        // new_game always builds PLAYER_ID and kingdoms are never removed
        &self.kingdoms[PLAYER_ID]
    }

    /// Non-player kingdom ids in ascending order.
    pub fn computer_ids(&self) -> Vec<KingdomId> {
        self.kingdoms
            .iter()
            .filter(|k| !k.is_player())
            .map(|k| k.id)
            .collect()
    }

    /// Append a log entry stamped with the current turn.
    pub fn log_event(&mut self, text: impl Into<String>, category: LogCategory) -> u64 {
        self.log.append(self.turn, text, category)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new_game()
    }
}

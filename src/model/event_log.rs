use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LogCategory {
    System,
    Player,
    /// A non-player kingdom's standard action.
    Enemy,
    Info,
    Success,
    Error,
}

string_enum!(LogCategory, EngineError::UnknownCategory, {
    System => "system",
    Player => "player",
    Enemy => "enemy",
    Info => "info",
    Success => "success",
    Error => "error",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub id: u64,
    pub turn: u32,
    pub text: String,
    pub category: LogCategory,
}

/// Append-only record of turn events.
///
/// Entries can be read but never modified or removed. Ids are unique and
/// increase with insertion order.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn append(&mut self, turn: u32, text: impl Into<String>, category: LogCategory) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(LogEntry {
            id,
            turn,
            text: text.into(),
            category,
        });
        id
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries appended at or after position `start`.
    pub fn since(&self, start: usize) -> &[LogEntry] {
        self.entries.get(start..).unwrap_or(&[])
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_sequential() {
        let mut log = EventLog::new();
        let a = log.append(1, "first", LogCategory::System);
        let b = log.append(1, "second", LogCategory::Player);
        let c = log.append(2, "third", LogCategory::Enemy);
        assert_eq!((a, b, c), (1, 2, 3));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn since_returns_tail() {
        let mut log = EventLog::new();
        log.append(1, "a", LogCategory::Info);
        log.append(1, "b", LogCategory::Info);
        let texts: Vec<&str> = log.since(1).iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["b"]);
        assert!(log.since(5).is_empty());
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&LogCategory::Success).unwrap();
        assert_eq!(json, "\"success\"");
        assert_eq!("error".parse::<LogCategory>(), Ok(LogCategory::Error));
    }

    #[test]
    fn category_round_trips_through_string() {
        for &category in LogCategory::ALL {
            let text = String::from(category);
            assert_eq!(LogCategory::try_from(text), Ok(category));
        }
        assert_eq!(
            LogCategory::try_from("warning".to_string()),
            Err(EngineError::UnknownCategory("warning".to_string()))
        );
    }

    #[test]
    fn category_deserializes_from_short_form() {
        let parsed: LogCategory = serde_json::from_str("\"enemy\"").unwrap();
        assert_eq!(parsed, LogCategory::Enemy);
        assert!(serde_json::from_str::<LogCategory>("\"loud\"").is_err());
    }
}

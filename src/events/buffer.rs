//! In-memory session event log

use uuid::Uuid;

use super::types::{GameConfig, GameEvent};

/// Collects a session's events in memory and serializes them as JSON lines.
/// No file I/O happens here; callers decide where the log goes.
#[derive(Default)]
pub struct EventBuffer {
    events: Vec<(u32, GameEvent)>,
    session_id: String,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session with a fresh UUID
    pub fn start_session(&mut self, timestamp: &str) {
        self.events.clear();
        self.session_id = Uuid::new_v4().to_string();
        self.log(
            0,
            GameEvent::SessionStart {
                session_id: self.session_id.clone(),
                timestamp: timestamp.to_string(),
            },
        );
    }

    /// Log the configuration snapshot
    pub fn log_config(&mut self, config: GameConfig) {
        self.log(0, GameEvent::Config(config));
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn log(&mut self, time_ms: u32, event: GameEvent) {
        self.events.push((time_ms, event));
    }

    /// Import events drained from an EventBus
    pub fn import_events(&mut self, events: Vec<(u32, GameEvent)>) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[(u32, GameEvent)] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serialize the whole log, one JSON line per event
    pub fn serialize(&self) -> String {
        self.events
            .iter()
            .map(|(time_ms, event)| serialize_event(*time_ms, event))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One event as a compact JSON log line
pub fn serialize_event(time_ms: u32, event: &GameEvent) -> String {
    let body = serde_json::to_string(event).unwrap_or_else(|_| "null".to_string());
    format!(r#"{{"t":{},"code":"{}","event":{}}}"#, time_ms, event.type_code(), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::BallId;

    #[test]
    fn test_session_start_is_first_event() {
        let mut buffer = EventBuffer::new();
        buffer.start_session("2024-01-01T00:00:00Z");
        assert_eq!(buffer.len(), 1);
        assert!(!buffer.session_id().is_empty());
        assert!(matches!(
            buffer.events()[0].1,
            GameEvent::SessionStart { .. }
        ));
    }

    #[test]
    fn test_serialized_lines_carry_type_codes() {
        let mut buffer = EventBuffer::new();
        buffer.log(
            120,
            GameEvent::Score {
                ball: BallId(2),
                points: 1,
                total: 1,
            },
        );
        let log = buffer.serialize();
        assert!(log.contains(r#""t":120"#), "log was: {log}");
        assert!(log.contains(r#""code":"G""#), "log was: {log}");
    }

    #[test]
    fn test_import_appends_in_order() {
        let mut buffer = EventBuffer::new();
        buffer.import_events(vec![
            (10, GameEvent::BallEvicted { ball: BallId(1) }),
            (20, GameEvent::BallEvicted { ball: BallId(2) }),
        ]);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.events()[1].0, 20);
    }
}

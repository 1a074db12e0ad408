//! Event bus - how the core notifies the outside world
//!
//! Scoring, eviction, and placement all announce themselves here; the
//! presentation layer drains the bus and decides what each event means to
//! it. Nothing in the bus itself reacts to an event, so call sites carry
//! the behavior, not the abstraction.

use bevy::prelude::*;

use super::types::GameEvent;

/// An event stamped with milliseconds since session start
#[derive(Debug, Clone)]
pub struct BusEvent {
    pub time_ms: u32,
    pub event: GameEvent,
}

/// Central event bus. Systems emit; observers drain.
#[derive(Resource, Default)]
pub struct EventBus {
    pending: Vec<BusEvent>,
    processed: Vec<BusEvent>,
    elapsed_ms: u32,
    enabled: bool,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// A bus that silently drops everything (for benchmarks and some tests)
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Update the elapsed time used to stamp events (called each frame)
    pub fn update_time(&mut self, elapsed_secs: f32) {
        self.elapsed_ms = (elapsed_secs * 1000.0) as u32;
    }

    pub fn emit(&mut self, event: GameEvent) {
        if !self.enabled {
            return;
        }
        self.pending.push(BusEvent {
            time_ms: self.elapsed_ms,
            event,
        });
    }

    /// Drain pending events, moving them to the processed list
    pub fn drain(&mut self) -> Vec<BusEvent> {
        let events = std::mem::take(&mut self.pending);
        self.processed.extend(events.clone());
        events
    }

    /// Drain pending events as `(time_ms, event)` pairs for an EventBuffer
    pub fn export_events(&mut self) -> Vec<(u32, GameEvent)> {
        self.drain()
            .into_iter()
            .map(|e| (e.time_ms, e.event))
            .collect()
    }

    /// Events already drained (kept for end-of-session logging)
    pub fn processed(&self) -> &[BusEvent] {
        &self.processed
    }

    pub fn clear_processed(&mut self) {
        self.processed.clear();
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

/// System keeping the bus timestamp in step with the app clock
pub fn update_event_bus_time(mut bus: ResMut<EventBus>, time: Res<Time>) {
    bus.update_time(time.elapsed_secs());
}

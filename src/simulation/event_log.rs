//! Event log of recent births and predation, newest first.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A logged event for display by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Tick during which the event happened
    pub tick: u64,
    /// Human-readable description of the event
    pub description: String,
    /// Category of the event
    pub kind: EventKind,
}

/// Event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A prey was born
    PreyBirth,
    /// A predator was born
    PredatorBirth,
    /// A predator ate a prey
    Predation,
}

/// Event log that keeps a bounded number of recent events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Adds a new event to the log
    pub fn log(&mut self, tick: u64, description: String, kind: EventKind) {
        self.events.push_front(LoggedEvent {
            tick,
            description,
            kind,
        });

        while self.events.len() > self.max_events {
            self.events.pop_back();
        }
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }

    /// Number of retained events of the given kind
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    /// Clears all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_newest_events_up_to_capacity() {
        let mut log = EventLog::new(2);
        log.log(0, "first".to_string(), EventKind::PreyBirth);
        log.log(1, "second".to_string(), EventKind::Predation);
        log.log(2, "third".to_string(), EventKind::PredatorBirth);

        let ticks: Vec<u64> = log.events().iter().map(|e| e.tick).collect();
        assert_eq!(ticks, vec![2, 1]);
        assert_eq!(log.count(EventKind::PreyBirth), 0);

        log.clear();
        assert!(log.events().is_empty());
    }
}

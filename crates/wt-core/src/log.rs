//! The ordered collection of completed events.

use serde::{Deserialize, Serialize};

use crate::event::CompletedEvent;

/// Append-only sequence of completed events, insertion order = completion
/// order.
///
/// Serializes as a plain JSON array of events, the whole-log blob that gets
/// persisted on every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<CompletedEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed event.
    pub fn push(&mut self, event: CompletedEvent) {
        self.events.push(event);
    }

    /// The recorded events, oldest first.
    pub fn events(&self) -> &[CompletedEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serializes the whole log to the persistence blob.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a persistence blob back into a log.
    pub fn from_json(blob: &str) -> serde_json::Result<Self> {
        serde_json::from_str(blob)
    }
}

impl FromIterator<CompletedEvent> for EventLog {
    fn from_iter<I: IntoIterator<Item = CompletedEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

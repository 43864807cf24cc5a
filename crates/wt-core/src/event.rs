//! Immutable completed-event records.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Sector, TaskName};

/// Error constructing a completed event.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EventError {
    /// The interval ends before it starts.
    #[error("event ends before it starts ({start} > {end})")]
    ReversedInterval {
        start: DateTime<Local>,
        end: DateTime<Local>,
    },
}

/// A finished span of work on a task.
///
/// Created exactly once when a running task is paused or stopped. A logical
/// task that is paused and resumed produces several of these, one per active
/// interval, all sharing the same task name and sector.
///
/// Persisted as a JSON object with `start`/`end` as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedEvent {
    pub task_name: TaskName,
    pub sector: Sector,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl CompletedEvent {
    /// Creates a completed event, rejecting reversed intervals.
    ///
    /// Zero-length intervals (start == end) are valid; starting a task and
    /// immediately stopping it records a near-zero span.
    pub fn new(
        task_name: TaskName,
        sector: Sector,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, EventError> {
        if start > end {
            return Err(EventError::ReversedInterval { start, end });
        }
        Ok(Self {
            task_name,
            sector,
            start,
            end,
        })
    }

    /// Elapsed time covered by this event.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

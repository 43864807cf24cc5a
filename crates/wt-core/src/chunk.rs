//! Splitting completed events into single-day segments.

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::event::CompletedEvent;
use crate::log::EventLog;
use crate::time::{end_of_day, next_day_start, same_day};
use crate::types::{Sector, TaskId, TaskName};

/// A single-calendar-day slice of a completed event.
///
/// Derived, never persisted; regenerated from the log on every
/// visualization pass. `start` and `end` always fall on the same calendar
/// day.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub task_name: TaskName,
    pub sector: Sector,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    /// Shared by every segment cut from the same source event.
    pub task_id: TaskId,
}

/// Errors failing a chunking pass.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChunkError {
    /// An event in the log ends before it starts. Persisted blobs bypass
    /// the event constructor, so this is re-checked here rather than looping
    /// forever or misrendering.
    #[error("event \"{task_name}\" ends before it starts ({start} > {end})")]
    MalformedInterval {
        task_name: TaskName,
        start: DateTime<Local>,
        end: DateTime<Local>,
    },
}

/// Cuts every event in the log into per-day segments.
///
/// Each event gets a fresh correlation id shared by its segments. The first
/// segment keeps the event's start, the last keeps its end; interior
/// boundaries land on 23:59:59 and the following local midnight. Output is
/// sorted by segment start so downstream day-grouping never fragments on
/// interleaved tasks.
pub fn chunk_log(log: &EventLog) -> Result<Vec<Segment>, ChunkError> {
    let mut segments = Vec::with_capacity(log.len());
    for event in log.events() {
        chunk_event(event, &mut segments)?;
    }
    segments.sort_by_key(|segment| segment.start);
    tracing::debug!(
        events = log.len(),
        segments = segments.len(),
        "chunked event log"
    );
    Ok(segments)
}

/// Appends the per-day segments of one event. O(days spanned).
fn chunk_event(event: &CompletedEvent, out: &mut Vec<Segment>) -> Result<(), ChunkError> {
    if event.start > event.end {
        return Err(ChunkError::MalformedInterval {
            task_name: event.task_name.clone(),
            start: event.start,
            end: event.end,
        });
    }

    let task_id = TaskId::new();
    let mut cursor = event.start;
    while !same_day(cursor, event.end) {
        out.push(Segment {
            task_name: event.task_name.clone(),
            sector: event.sector.clone(),
            start: cursor,
            end: end_of_day(cursor),
            task_id,
        });
        cursor = next_day_start(cursor);
    }
    out.push(Segment {
        task_name: event.task_name.clone(),
        sector: event.sector.clone(),
        start: cursor,
        end: event.end,
        task_id,
    });
    Ok(())
}

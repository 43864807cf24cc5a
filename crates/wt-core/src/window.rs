//! Trailing-window selection of visible segments.

use chrono::Duration;
use thiserror::Error;

use crate::chunk::Segment;
use crate::time::{end_of_day, start_of_day};

/// Default number of trailing days shown by the week grid.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Errors selecting the visible window.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// No segments at all, so the window's anchor day is undefined.
    #[error("no recorded events to display")]
    EmptyLog,
}

/// Keeps the segments falling inside the trailing `days`-day window.
///
/// The window is anchored on the last segment of the (start-sorted) input:
/// its upper bound is the end of that segment's last day, its lower bound
/// the start of the day `days` days earlier. Segments starting before the
/// lower bound are dropped entirely, not clipped; order is preserved.
pub fn trailing_window(segments: &[Segment], days: u32) -> Result<Vec<Segment>, WindowError> {
    let last = segments.last().ok_or(WindowError::EmptyLog)?;
    let upper_bound = end_of_day(last.end);
    let lower_bound = start_of_day(upper_bound - Duration::days(i64::from(days)));

    Ok(segments
        .iter()
        .filter(|segment| segment.start >= lower_bound)
        .cloned()
        .collect())
}

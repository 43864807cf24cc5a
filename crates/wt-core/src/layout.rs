//! Week-grid geometry: per-segment offsets and widths, grouped by day.
//!
//! Pure computation; rendering (terminal, SVG) consumes the [`DayRow`]
//! structure elsewhere.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::chunk::Segment;
use crate::time::{pixel_span, start_of_day};
use crate::types::{Sector, TaskId, TaskName};

/// Geometry parameters for the week grid.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal pixels per elapsed hour.
    pub pixels_per_hour: f64,
    /// Uniform block height in pixels, applied to every block.
    pub row_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pixels_per_hour: 30.0,
            row_height: 36,
        }
    }
}

/// One drawable rectangle of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub task_id: TaskId,
    pub task_name: TaskName,
    pub sector: Sector,
    /// Horizontal offset within the day, in pixels: hours since local
    /// midnight times pixels-per-hour.
    pub offset: f64,
    /// Width in pixels: elapsed hours times pixels-per-hour.
    pub width: f64,
    pub height: u32,
}

/// All blocks of one visible calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRow {
    pub date: NaiveDate,
    /// The day-of-month label shown next to the row.
    pub day_of_month: u32,
    pub blocks: Vec<Block>,
}

/// Groups date-sorted segments into day rows with computed geometry.
///
/// A new row starts whenever the calendar date of a segment's start differs
/// from the previous segment's. The chunker sorts its output, so each
/// visible day produces exactly one row.
pub fn layout_week(segments: &[Segment], config: &LayoutConfig) -> Vec<DayRow> {
    let mut rows: Vec<DayRow> = Vec::new();
    for segment in segments {
        let date = segment.start.date_naive();
        let block = Block {
            task_id: segment.task_id,
            task_name: segment.task_name.clone(),
            sector: segment.sector.clone(),
            offset: pixel_span(
                start_of_day(segment.start),
                segment.start,
                config.pixels_per_hour,
            ),
            width: pixel_span(segment.start, segment.end, config.pixels_per_hour),
            height: config.row_height,
        };
        if rows.last().is_none_or(|row| row.date != date) {
            rows.push(DayRow {
                date,
                day_of_month: date.day(),
                blocks: Vec::new(),
            });
        }
        if let Some(row) = rows.last_mut() {
            row.blocks.push(block);
        }
    }
    rows
}

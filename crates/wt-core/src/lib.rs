//! Core domain logic for the week tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Recording: the start/pause/resume/stop state machine producing
//!   immutable completed events
//! - Chunking: splitting multi-day events into single-day segments
//! - Windowing: selecting the trailing N-day range of segments
//! - Layout: computing pixel geometry for the week grid

pub mod chunk;
pub mod event;
pub mod layout;
pub mod log;
pub mod recorder;
pub mod time;
pub mod types;
pub mod window;

pub use chunk::{ChunkError, Segment, chunk_log};
pub use event::{CompletedEvent, EventError};
pub use layout::{Block, DayRow, LayoutConfig, layout_week};
pub use log::EventLog;
pub use recorder::{ActiveTask, Recorder, RecorderState, TransitionError};
pub use types::{Sector, TaskId, TaskName, ValidationError};
pub use window::{DEFAULT_WINDOW_DAYS, WindowError, trailing_window};

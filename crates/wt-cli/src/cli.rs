//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Personal time tracker with a week-at-a-glance grid.
///
/// Records start/pause/resume/stop spans for named tasks grouped by
/// sector and renders the trailing week as proportionally-sized blocks
/// per day.
#[derive(Debug, Parser)]
#[command(name = "wt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start tracking a task.
    Start {
        /// The task as `<name>,<sector>`, e.g. `api refactor,coding`.
        #[arg(value_name = "NAME,SECTOR")]
        task: String,
    },

    /// Pause the running task, closing the active span.
    Pause,

    /// Resume the paused task with a fresh span.
    Resume,

    /// Stop tracking and return to idle.
    Stop,

    /// Show the recorder state and log size.
    Status,

    /// Render the trailing week as per-day blocks.
    Week {
        /// Number of trailing days to show (defaults to the configured
        /// window).
        #[arg(long)]
        days: Option<u32>,

        /// Write the grid as an HTML/SVG document to this path instead of
        /// drawing it in the terminal.
        #[arg(long, value_name = "PATH")]
        svg: Option<PathBuf>,

        /// Emit the computed layout as JSON.
        #[arg(long, conflicts_with = "svg")]
        json: bool,
    },

    /// Interactive prompt reading start/pause/resume/stop lines.
    Repl,
}

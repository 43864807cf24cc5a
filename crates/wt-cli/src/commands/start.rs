//! Start command: begin tracking a task.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Local};

use wt_store::Store;

use crate::command::{Command, parse_task_argument};
use crate::commands::util::{apply, load_session};

/// Parses the `<name>,<sector>` argument and starts tracking.
pub fn run<W: Write>(
    writer: &mut W,
    store: &Store,
    task: &str,
    now: DateTime<Local>,
) -> Result<()> {
    let (task_name, sector) = parse_task_argument(task)?;
    let mut session = load_session(store)?;
    let feedback = apply(store, &mut session, &Command::Start { task_name, sector }, now)?;
    writeln!(writer, "{feedback}")?;
    Ok(())
}

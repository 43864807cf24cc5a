//! Pause command: close the active span, keeping the task resumable.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Local};

use wt_store::Store;

use crate::command::Command;
use crate::commands::util::{apply, load_session};

pub fn run<W: Write>(writer: &mut W, store: &Store, now: DateTime<Local>) -> Result<()> {
    let mut session = load_session(store)?;
    let feedback = apply(store, &mut session, &Command::Pause, now)?;
    writeln!(writer, "{feedback}")?;
    Ok(())
}

//! Resume command: continue a paused task with a fresh span.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Local};

use wt_store::Store;

use crate::command::Command;
use crate::commands::util::{apply, load_session};

pub fn run<W: Write>(writer: &mut W, store: &Store, now: DateTime<Local>) -> Result<()> {
    let mut session = load_session(store)?;
    let feedback = apply(store, &mut session, &Command::Resume, now)?;
    writeln!(writer, "{feedback}")?;
    Ok(())
}

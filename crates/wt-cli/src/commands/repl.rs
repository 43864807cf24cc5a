//! Interactive prompt reading free-text tracking commands.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::Local;

use wt_store::Store;

use crate::command::parse_command;
use crate::commands::util::{apply, load_session};

/// Reads command lines until EOF or `exit`, applying each to the session.
///
/// Parse failures and invalid transitions are reported and the loop
/// continues; only store failures abort.
pub fn run<R: BufRead, W: Write>(reader: R, writer: &mut W, store: &Store) -> Result<()> {
    let mut session = load_session(store)?;

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("exit") {
            break;
        }

        match parse_command(trimmed) {
            Ok(command) => {
                let feedback = apply(store, &mut session, &command, Local::now())?;
                writeln!(writer, "{feedback}")?;
            }
            Err(err) => writeln!(writer, "{err}")?,
        }
    }
    Ok(())
}

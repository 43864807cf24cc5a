//! Status command: show the recorder state and log size.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Local};

use wt_core::RecorderState;
use wt_store::Store;

use crate::commands::util::{format_duration, load_session};

pub fn run<W: Write>(writer: &mut W, store: &Store, now: DateTime<Local>) -> Result<()> {
    let session = load_session(store)?;

    match session.recorder.state() {
        RecorderState::Idle => writeln!(writer, "Idle.")?,
        RecorderState::Running(task) => {
            let elapsed = (now - task.started_at).num_milliseconds();
            writeln!(
                writer,
                "Running \"{}\" ({}) since {}, {} elapsed",
                task.task_name,
                task.sector,
                task.started_at.format("%Y-%m-%d %H:%M:%S"),
                format_duration(elapsed)
            )?;
        }
        RecorderState::Paused(task) => {
            writeln!(writer, "Paused \"{}\" ({})", task.task_name, task.sector)?;
        }
    }

    writeln!(writer, "{} completed events recorded.", session.log.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;
    use insta::assert_snapshot;
    use wt_core::{Sector, TaskName};

    use crate::command::Command;
    use crate::commands::util::{apply, load_session};

    fn at(h: u32, mi: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 1, 15, h, mi, 0)
            .single()
            .expect("valid test timestamp")
    }

    fn start_command(name: &str, sector: &str) -> Command {
        Command::Start {
            task_name: TaskName::new(name).unwrap(),
            sector: Sector::new(sector).unwrap(),
        }
    }

    fn output_at(store: &Store, now: DateTime<Local>) -> String {
        let mut output = Vec::new();
        run(&mut output, store, now).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn status_reports_idle_with_empty_log() {
        let store = Store::open_in_memory().unwrap();
        assert_snapshot!(output_at(&store, at(9, 0)), @r"
        Idle.
        0 completed events recorded.
        ");
    }

    #[test]
    fn status_reports_running_task_with_elapsed_time() {
        let store = Store::open_in_memory().unwrap();
        let mut session = load_session(&store).unwrap();
        apply(&store, &mut session, &start_command("code", "work"), at(9, 0)).unwrap();

        assert_snapshot!(output_at(&store, at(10, 30)), @r#"
        Running "code" (work) since 2026-01-15 09:00:00, 1h 30m elapsed
        0 completed events recorded.
        "#);
    }

    #[test]
    fn status_reports_paused_task_and_log_size() {
        let store = Store::open_in_memory().unwrap();
        let mut session = load_session(&store).unwrap();
        apply(&store, &mut session, &start_command("code", "work"), at(9, 0)).unwrap();
        apply(&store, &mut session, &Command::Pause, at(9, 45)).unwrap();

        assert_snapshot!(output_at(&store, at(10, 0)), @r#"
        Paused "code" (work)
        1 completed events recorded.
        "#);
    }
}

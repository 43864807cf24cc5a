//! Shared session plumbing for the recorder commands.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use wt_core::{CompletedEvent, EventLog, Recorder};
use wt_store::Store;

use crate::command::Command;

/// Recorder state plus the event log, loaded and persisted together.
pub struct Session {
    pub recorder: Recorder,
    pub log: EventLog,
}

/// Loads the session from the store. Missing blobs default to an idle
/// recorder and an empty log.
pub fn load_session(store: &Store) -> Result<Session> {
    let recorder = store
        .load_session()
        .context("failed to load recorder session")?;
    let log = store.load_log().context("failed to load event log")?;
    Ok(Session { recorder, log })
}

/// Persists the session. When a transition closed a span, the event is
/// appended and the whole log rewritten before the recorder state.
fn commit(store: &Store, session: &mut Session, event: Option<CompletedEvent>) -> Result<()> {
    if let Some(event) = event {
        session.log.push(event);
        store
            .save_log(&session.log)
            .context("failed to persist event log")?;
    }
    store
        .save_session(&session.recorder)
        .context("failed to persist recorder session")?;
    Ok(())
}

/// Applies one tracking command to the session and persists the outcome.
///
/// Returns the feedback line for the user. Invalid transitions are
/// warnings, not failures: the state is left untouched and the command
/// reports why it was ignored.
pub fn apply(
    store: &Store,
    session: &mut Session,
    command: &Command,
    now: DateTime<Local>,
) -> Result<String> {
    match command {
        Command::Start { task_name, sector } => {
            match session.recorder.start(task_name.clone(), sector.clone(), now) {
                Ok(()) => {
                    commit(store, session, None)?;
                    Ok(format!("Started \"{task_name}\" ({sector})"))
                }
                Err(err) => ignored(err),
            }
        }
        Command::Pause => match session.recorder.pause(now) {
            Ok(event) => {
                let feedback = format!(
                    "Paused \"{}\" after {}",
                    event.task_name,
                    format_duration(event.duration().num_milliseconds())
                );
                commit(store, session, Some(event))?;
                Ok(feedback)
            }
            Err(err) => ignored(err),
        },
        Command::Resume => match session.recorder.resume(now) {
            Ok(()) => {
                commit(store, session, None)?;
                let task_name = session
                    .recorder
                    .active_task()
                    .map(|task| task.task_name.to_string())
                    .unwrap_or_default();
                Ok(format!("Resumed \"{task_name}\""))
            }
            Err(err) => ignored(err),
        },
        Command::Stop => {
            let task_name = session
                .recorder
                .active_task()
                .map(|task| task.task_name.to_string());
            match session.recorder.stop(now) {
                Ok(Some(event)) => {
                    let feedback = format!(
                        "Stopped \"{}\" after {}",
                        event.task_name,
                        format_duration(event.duration().num_milliseconds())
                    );
                    commit(store, session, Some(event))?;
                    Ok(feedback)
                }
                Ok(None) => {
                    commit(store, session, None)?;
                    let task_name = task_name.unwrap_or_default();
                    Ok(format!(
                        "Stopped \"{task_name}\" (span already recorded at pause)"
                    ))
                }
                Err(err) => ignored(err),
            }
        }
    }
}

fn ignored(err: wt_core::TransitionError) -> Result<String> {
    tracing::warn!(%err, "ignored invalid transition");
    Ok(format!("Ignored: {err}"))
}

/// Formats milliseconds as duration string.
/// Returns "Xh Ym" if >= 1 hour, "Xm Ys" if < 1 hour, "Xs" if < 1 minute.
pub fn format_duration(ms: i64) -> String {
    if ms < 0 {
        return "0s".to_string();
    }
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else if minutes >= 1 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

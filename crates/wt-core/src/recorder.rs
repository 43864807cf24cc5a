//! The start/pause/resume/stop state machine for the active task.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::CompletedEvent;
use crate::types::{Sector, TaskName};

/// The task currently being tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveTask {
    pub task_name: TaskName,
    pub sector: Sector,
    /// Start of the current active interval. Reset on resume, so a paused
    /// and resumed task accrues a fresh span rather than reopening the old
    /// one.
    pub started_at: DateTime<Local>,
}

impl ActiveTask {
    /// Emits the completed span from `started_at` to `end`.
    ///
    /// The wall clock may step backwards between invocations; the end is
    /// clamped so start <= end always holds.
    fn close(&self, end: DateTime<Local>) -> CompletedEvent {
        CompletedEvent {
            task_name: self.task_name.clone(),
            sector: self.sector.clone(),
            start: self.started_at,
            end: end.max(self.started_at),
        }
    }
}

/// Recorder state. Exactly one task may be active per session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "task", rename_all = "lowercase")]
pub enum RecorderState {
    #[default]
    Idle,
    Running(ActiveTask),
    Paused(ActiveTask),
}

/// A transition that is not allowed from the current state.
///
/// These are non-fatal: callers log them and leave the recorder unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransitionError {
    /// `start` while a task is already running or paused.
    #[error("task \"{task_name}\" is already active")]
    AlreadyActive { task_name: TaskName },

    /// `pause` while no task is running.
    #[error("no running task to pause")]
    NotRunning,

    /// `resume` while no task is paused.
    #[error("no paused task to resume")]
    NotPaused,

    /// `stop` while idle.
    #[error("no active task to stop")]
    NothingActive,
}

/// Session-scoped recorder owning the active-task slot.
///
/// All operations take the current instant as a parameter; callers pass
/// `Local::now()`. Invalid transitions return a [`TransitionError`] and
/// leave the state untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recorder {
    state: RecorderState,
}

impl Recorder {
    /// Creates an idle recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the recorder.
    pub fn state(&self) -> &RecorderState {
        &self.state
    }

    /// The active task, if one is running or paused.
    pub fn active_task(&self) -> Option<&ActiveTask> {
        match &self.state {
            RecorderState::Idle => None,
            RecorderState::Running(task) | RecorderState::Paused(task) => Some(task),
        }
    }

    /// Begins tracking a new task. Allowed only from idle.
    pub fn start(
        &mut self,
        task_name: TaskName,
        sector: Sector,
        now: DateTime<Local>,
    ) -> Result<(), TransitionError> {
        match &self.state {
            RecorderState::Idle => {
                self.state = RecorderState::Running(ActiveTask {
                    task_name,
                    sector,
                    started_at: now,
                });
                Ok(())
            }
            RecorderState::Running(task) | RecorderState::Paused(task) => {
                Err(TransitionError::AlreadyActive {
                    task_name: task.task_name.clone(),
                })
            }
        }
    }

    /// Pauses the running task, closing the active span as a completed
    /// event. Allowed only from running.
    pub fn pause(&mut self, now: DateTime<Local>) -> Result<CompletedEvent, TransitionError> {
        match std::mem::take(&mut self.state) {
            RecorderState::Running(task) => {
                let event = task.close(now);
                self.state = RecorderState::Paused(task);
                Ok(event)
            }
            other => {
                self.state = other;
                Err(TransitionError::NotRunning)
            }
        }
    }

    /// Resumes the paused task with a fresh span starting now. Emits
    /// nothing. Allowed only from paused.
    pub fn resume(&mut self, now: DateTime<Local>) -> Result<(), TransitionError> {
        match std::mem::take(&mut self.state) {
            RecorderState::Paused(task) => {
                self.state = RecorderState::Running(ActiveTask {
                    started_at: now,
                    ..task
                });
                Ok(())
            }
            other => {
                self.state = other;
                Err(TransitionError::NotPaused)
            }
        }
    }

    /// Stops tracking and returns to idle.
    ///
    /// From running, the active span is closed and returned. From paused,
    /// nothing is emitted: the span up to the pause was already recorded,
    /// so stopping only clears the active-task slot. A paused task must
    /// still be stoppable, or the session could never return to idle.
    pub fn stop(
        &mut self,
        now: DateTime<Local>,
    ) -> Result<Option<CompletedEvent>, TransitionError> {
        match std::mem::take(&mut self.state) {
            RecorderState::Running(task) => Ok(Some(task.close(now))),
            RecorderState::Paused(_) => Ok(None),
            RecorderState::Idle => Err(TransitionError::NothingActive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minutes: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 1, 15, 9, minutes, 0)
            .single()
            .expect("valid test timestamp")
    }

    fn started(recorder: &mut Recorder) {
        recorder
            .start(
                TaskName::new("code").unwrap(),
                Sector::new("work").unwrap(),
                at(0),
            )
            .unwrap();
    }

    #[test]
    fn start_then_stop_emits_one_event() {
        let mut recorder = Recorder::new();
        started(&mut recorder);

        let event = recorder.stop(at(30)).unwrap().expect("running stop emits");
        assert_eq!(event.start, at(0));
        assert_eq!(event.end, at(30));
        assert_eq!(recorder.state(), &RecorderState::Idle);
    }

    #[test]
    fn immediate_stop_emits_zero_length_event() {
        let mut recorder = Recorder::new();
        started(&mut recorder);

        let event = recorder.stop(at(0)).unwrap().expect("running stop emits");
        assert_eq!(event.start, event.end);
    }

    #[test]
    fn pause_resume_stop_emits_two_events() {
        let mut recorder = Recorder::new();
        started(&mut recorder);

        let first = recorder.pause(at(10)).unwrap();
        recorder.resume(at(20)).unwrap();
        let second = recorder.stop(at(30)).unwrap().expect("running stop emits");

        assert_eq!((first.start, first.end), (at(0), at(10)));
        assert_eq!((second.start, second.end), (at(20), at(30)));
        assert_eq!(first.task_name, second.task_name);
        assert_eq!(first.sector, second.sector);
    }

    #[test]
    fn stop_while_paused_goes_idle_without_emitting() {
        let mut recorder = Recorder::new();
        started(&mut recorder);
        recorder.pause(at(10)).unwrap();

        let emitted = recorder.stop(at(20)).unwrap();
        assert!(emitted.is_none());
        assert_eq!(recorder.state(), &RecorderState::Idle);
    }

    #[test]
    fn start_while_active_is_rejected() {
        let mut recorder = Recorder::new();
        started(&mut recorder);
        let before = recorder.clone();

        let result = recorder.start(
            TaskName::new("other").unwrap(),
            Sector::new("work").unwrap(),
            at(5),
        );
        assert!(matches!(
            result,
            Err(TransitionError::AlreadyActive { .. })
        ));
        assert_eq!(recorder, before);
    }

    #[test]
    fn pause_while_idle_or_paused_is_rejected() {
        let mut recorder = Recorder::new();
        assert_eq!(recorder.pause(at(0)), Err(TransitionError::NotRunning));

        started(&mut recorder);
        recorder.pause(at(10)).unwrap();
        let before = recorder.clone();
        assert_eq!(recorder.pause(at(20)), Err(TransitionError::NotRunning));
        assert_eq!(recorder, before);
    }

    #[test]
    fn resume_while_running_is_rejected() {
        let mut recorder = Recorder::new();
        started(&mut recorder);
        let before = recorder.clone();

        assert_eq!(recorder.resume(at(5)), Err(TransitionError::NotPaused));
        assert_eq!(recorder, before);
    }

    #[test]
    fn stop_while_idle_is_rejected() {
        let mut recorder = Recorder::new();
        assert_eq!(recorder.stop(at(0)), Err(TransitionError::NothingActive));
    }

    #[test]
    fn resume_starts_a_fresh_span() {
        let mut recorder = Recorder::new();
        started(&mut recorder);
        recorder.pause(at(10)).unwrap();
        recorder.resume(at(20)).unwrap();

        let task = recorder.active_task().expect("running after resume");
        assert_eq!(task.started_at, at(20));
    }

    #[test]
    fn backwards_clock_is_clamped() {
        let mut recorder = Recorder::new();
        recorder
            .start(
                TaskName::new("code").unwrap(),
                Sector::new("work").unwrap(),
                at(10),
            )
            .unwrap();

        let event = recorder.stop(at(5)).unwrap().expect("running stop emits");
        assert_eq!(event.start, event.end);
    }

    #[test]
    fn state_serde_roundtrip() {
        let mut recorder = Recorder::new();
        started(&mut recorder);
        recorder.pause(at(10)).unwrap();

        let json = serde_json::to_string(&recorder).unwrap();
        let parsed: Recorder = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, recorder);
    }
}

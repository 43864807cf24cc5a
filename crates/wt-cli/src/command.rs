//! The free-text command grammar.
//!
//! One line per command: `start <name>,<sector>`, `pause`, `resume`,
//! `stop` (aliases `end`, `quit`). Keywords are case-insensitive and
//! whitespace-tolerant.

use anyhow::{Result, bail};

use wt_core::{Sector, TaskName};

/// A parsed tracking command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start { task_name: TaskName, sector: Sector },
    Pause,
    Resume,
    Stop,
}

/// Parses one command line.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "start" => {
            let (task_name, sector) = parse_task_argument(rest)?;
            Ok(Command::Start { task_name, sector })
        }
        "pause" | "resume" | "stop" | "end" | "quit" if !rest.is_empty() => {
            bail!("'{keyword}' takes no arguments")
        }
        "pause" => Ok(Command::Pause),
        "resume" => Ok(Command::Resume),
        "stop" | "end" | "quit" => Ok(Command::Stop),
        "" => bail!("empty command"),
        other => bail!("unknown command: {other}"),
    }
}

/// Parses the `<name>,<sector>` argument of `start`.
pub fn parse_task_argument(argument: &str) -> Result<(TaskName, Sector)> {
    let Some((name, sector)) = argument.split_once(',') else {
        bail!("expected a task as <name>,<sector>, e.g. `api refactor,coding`");
    };
    Ok((TaskName::new(name)?, Sector::new(sector)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_with_name_and_sector() {
        let command = parse_command("start api refactor,coding").unwrap();
        let Command::Start { task_name, sector } = command else {
            panic!("expected start");
        };
        assert_eq!(task_name.as_str(), "api refactor");
        assert_eq!(sector.as_str(), "coding");
    }

    #[test]
    fn trims_whitespace_around_the_separator() {
        let command = parse_command("  start nap , sleep  ").unwrap();
        let Command::Start { task_name, sector } = command else {
            panic!("expected start");
        };
        assert_eq!(task_name.as_str(), "nap");
        assert_eq!(sector.as_str(), "sleep");
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_command("PAUSE").unwrap(), Command::Pause);
        assert_eq!(parse_command("Resume").unwrap(), Command::Resume);
        assert_eq!(parse_command("STOP").unwrap(), Command::Stop);
    }

    #[test]
    fn end_and_quit_alias_stop() {
        assert_eq!(parse_command("end").unwrap(), Command::Stop);
        assert_eq!(parse_command("quit").unwrap(), Command::Stop);
    }

    #[test]
    fn start_without_separator_is_rejected() {
        assert!(parse_command("start lunch").is_err());
    }

    #[test]
    fn start_with_empty_name_or_sector_is_rejected() {
        assert!(parse_command("start ,coding").is_err());
        assert!(parse_command("start lunch,").is_err());
    }

    #[test]
    fn unknown_and_empty_commands_are_rejected() {
        assert!(parse_command("restart").is_err());
        assert!(parse_command("").is_err());
        assert!(parse_command("   ").is_err());
    }

    #[test]
    fn bare_commands_reject_trailing_arguments() {
        assert!(parse_command("pause now").is_err());
        assert!(parse_command("quit everything").is_err());
    }
}

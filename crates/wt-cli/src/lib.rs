//! Week tracker CLI library.
//!
//! This crate provides the `wt` command-line interface: one-shot
//! subcommands for recorder transitions and visualization, plus an
//! interactive repl over the free-text command grammar.

mod cli;
pub mod command;
pub mod commands;
mod config;
pub mod render;
pub mod svg;

pub use cli::{Cli, Commands};
pub use command::Command;
pub use config::Config;

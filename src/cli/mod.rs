//! Terminal front end: a guided dialoguer wizard, a line-based script mode
//! and the one-shot `quote` command.

pub mod commands;
pub mod context;
pub mod input;
mod interactive;
pub mod output;
pub mod quote;
pub mod render;
mod script;

use std::io;

use shell_words::split;

use crate::errors::CourseError;

pub use context::{CliMode, LoopControl, ShellContext};

/// Setting this variable switches the shell to script mode.
pub const SCRIPT_ENV: &str = "COURSE_BUILDER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CourseError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => interactive::run_interactive(&mut context),
        CliMode::Script => script::run_script(&mut context, io::stdin().lock()),
    }
}

pub(crate) fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CourseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(LoopControl::Continue);
    }

    let tokens = match split(trimmed) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(err);
            return Ok(LoopControl::Continue);
        }
    };
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };

    let command = raw.to_lowercase();
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();

    match context.dispatch(&command, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

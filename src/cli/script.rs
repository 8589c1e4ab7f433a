use std::io::BufRead;

use crate::cli::context::{LoopControl, ShellContext};
use crate::cli::handle_line;
use crate::errors::CourseError;

/// Runs one command per input line until `exit` or end of input.
pub(crate) fn run_script(context: &mut ShellContext, input: impl BufRead) -> Result<(), CourseError> {
    for line in input.lines() {
        if !context.running {
            break;
        }
        let line = line?;
        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

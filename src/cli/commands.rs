use strsim::levenshtein;

use crate::catalog;
use crate::cli::context::{LoopControl, ShellContext};
use crate::cli::input::{build_update, InputMode};
use crate::cli::output;
use crate::cli::render;
use crate::errors::CourseError;
use crate::wizard::WizardField;

#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub const COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "status",
        usage: "status",
        summary: "Show progress and the options of the current step",
    },
    CommandEntry {
        name: "select",
        usage: "select <ids...>",
        summary: "Replace the current step's selection",
    },
    CommandEntry {
        name: "toggle",
        usage: "toggle <id>",
        summary: "Add or remove one option on the current step",
    },
    CommandEntry {
        name: "set",
        usage: "set <field> <ids...>",
        summary: "Replace any field, e.g. `set books digital`",
    },
    CommandEntry {
        name: "next",
        usage: "next",
        summary: "Continue to the next step once this one is complete",
    },
    CommandEntry {
        name: "back",
        usage: "back",
        summary: "Return to the previous step",
    },
    CommandEntry {
        name: "summary",
        usage: "summary",
        summary: "Show the price summary",
    },
    CommandEntry {
        name: "finalize",
        usage: "finalize",
        summary: "Print the finished plan as JSON (last step only)",
    },
    CommandEntry {
        name: "restart",
        usage: "restart",
        summary: "Clear every selection and start over",
    },
    CommandEntry {
        name: "catalog",
        usage: "catalog [field]",
        summary: "List the options of a field",
    },
    CommandEntry {
        name: "mentors",
        usage: "mentors [all|qa|varc|lrdi]",
        summary: "List mentors teaching a subject",
    },
    CommandEntry {
        name: "help",
        usage: "help [command]",
        summary: "Show available commands",
    },
    CommandEntry {
        name: "exit",
        usage: "exit",
        summary: "Leave the shell",
    },
];

pub fn command(name: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|entry| entry.name == name)
}

/// Closest command name within a small edit distance.
pub fn suggest_command(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|entry| (levenshtein(entry.name, input), entry.name))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CourseError> {
        match command {
            "status" => self.show_status(),
            "select" => self.edit_current(args, InputMode::Replace)?,
            "toggle" => self.edit_current(args, InputMode::Toggle)?,
            "set" => self.set_field(args)?,
            "next" => self.next_step(),
            "back" => self.previous_step(),
            "summary" => self.show_summary(),
            "finalize" => self.finalize()?,
            "restart" => {
                self.wizard.restart();
                output::success("Selections cleared.");
                self.show_status();
            }
            "catalog" => self.show_catalog(args)?,
            "mentors" => self.show_mentors(args),
            "help" => self.show_help(args),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            other => self.unknown_command(other),
        }
        Ok(LoopControl::Continue)
    }

    fn unknown_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        if let Some(best) = suggest_command(input) {
            output::hint(format!("Did you mean `{best}`?"));
        }
    }

    pub(crate) fn show_status(&self) {
        output::lines(render::progress_lines(&self.wizard.progress()));
        if let Some(step) = self.wizard.current_definition() {
            output::section(format!("Step {}", self.wizard.current_step()));
            output::lines(render::step_lines(
                step,
                self.wizard.selection(),
                &self.plan_fields(),
                self.engine.table(),
                &self.locale,
            ));
        }
        output::info(self.wizard.coach_tip());
    }

    pub(crate) fn show_summary(&self) {
        output::section("Your Course Summary");
        let breakdown = self.wizard.quote(&self.engine);
        output::lines(render::summary_lines(&breakdown, &self.locale));
    }

    fn current_field(&self) -> Result<WizardField, CourseError> {
        self.wizard
            .current_definition()
            .and_then(|step| step.kind.field())
            .ok_or_else(|| {
                CourseError::InvalidArgument("There is nothing to select on this step.".into())
            })
    }

    fn edit_current(&mut self, ids: &[&str], mode: InputMode) -> Result<(), CourseError> {
        let field = self.current_field()?;
        self.apply(field, ids, mode)
    }

    fn set_field(&mut self, args: &[&str]) -> Result<(), CourseError> {
        let (name, ids) = args.split_first().ok_or_else(|| {
            CourseError::InvalidArgument("usage: set <field> <ids...>".into())
        })?;
        let field = WizardField::from_id(name).ok_or_else(|| {
            CourseError::InvalidArgument(format!("Unknown field `{name}`"))
        })?;
        self.apply(field, ids, InputMode::Replace)
    }

    pub(crate) fn apply(
        &mut self,
        field: WizardField,
        ids: &[&str],
        mode: InputMode,
    ) -> Result<(), CourseError> {
        let update = build_update(field, ids, mode)?;
        self.wizard.update(update);
        let values = render::selection_lines(self.wizard.selection(), &[field]);
        output::success(values.join(""));
        Ok(())
    }

    pub(crate) fn next_step(&mut self) {
        if self.wizard.advance() {
            self.show_status();
        } else if self.wizard.is_terminal() {
            output::warning("Already on the last step. Use `finalize` to finish.");
        } else {
            output::warning("Complete this step before continuing.");
        }
    }

    pub(crate) fn previous_step(&mut self) {
        if self.wizard.retreat() {
            self.show_status();
        } else {
            output::warning("Already on the first step.");
        }
    }

    fn finalize(&mut self) -> Result<(), CourseError> {
        match self.wizard.finalize(&self.engine) {
            Some(plan) => {
                output::success("Course plan finalized.");
                println!("{}", serde_json::to_string_pretty(&plan)?);
            }
            None => {
                output::warning(format!(
                    "Finalize is available on step {}.",
                    self.wizard.total_steps()
                ));
            }
        }
        Ok(())
    }

    fn show_catalog(&self, args: &[&str]) -> Result<(), CourseError> {
        let field = match args.first() {
            Some(name) => WizardField::from_id(name).ok_or_else(|| {
                CourseError::InvalidArgument(format!("Unknown field `{name}`"))
            })?,
            None => self.current_field()?,
        };
        output::section(field);
        output::lines(render::catalog_lines(field, self.engine.table(), &self.locale));
        Ok(())
    }

    fn show_mentors(&self, args: &[&str]) {
        let filter = args.first().copied().unwrap_or("all");
        output::section(format!("Mentors ({filter})"));
        let mentors = catalog::mentors_for_subject(filter);
        output::lines(render::mentor_lines(&mentors, self.engine.table(), &self.locale));
    }

    fn show_help(&self, args: &[&str]) {
        if let Some(name) = args.first() {
            match command(name) {
                Some(entry) => output::info(format!("{} - {}", entry.usage, entry.summary)),
                None => self.unknown_command(name),
            }
            return;
        }
        output::section("Commands");
        for entry in COMMANDS {
            println!("  {:<28}{}", entry.usage, entry.summary);
        }
    }
}

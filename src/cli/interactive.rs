use dialoguer::{MultiSelect, Select};

use crate::catalog;
use crate::cli::context::ShellContext;
use crate::cli::input::InputMode;
use crate::cli::output;
use crate::currency::format_money;
use crate::errors::CourseError;
use crate::wizard::{FieldValue, StepKind, WizardField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Next,
    Back,
    Edit,
    Summary,
    Finalize,
    Restart,
    Exit,
}

impl Action {
    fn label(self) -> &'static str {
        match self {
            Action::Next => "Continue",
            Action::Back => "Previous step",
            Action::Edit => "Change selection",
            Action::Summary => "Price summary",
            Action::Finalize => "Finalize plan",
            Action::Restart => "Start over",
            Action::Exit => "Exit",
        }
    }
}

/// Guided wizard: one prompt per step, then a navigation menu.
pub(crate) fn run_interactive(context: &mut ShellContext) -> Result<(), CourseError> {
    output::section(format!("Build Your CAT Course ({})", context.variant));
    let mut prompt_step = true;
    while context.running {
        context.show_status();
        if prompt_step {
            edit_step(context)?;
            context.show_summary();
        }
        prompt_step = match choose_action(context)? {
            Action::Next => {
                context.next_step_quiet();
                true
            }
            Action::Back => {
                context.previous_step_quiet();
                true
            }
            Action::Edit => true,
            Action::Summary => {
                context.show_summary();
                false
            }
            Action::Finalize => {
                context.dispatch("finalize", &[])?;
                false
            }
            Action::Restart => {
                context.wizard.restart();
                output::success("Selections cleared.");
                true
            }
            Action::Exit => {
                context.running = false;
                false
            }
        };
    }
    output::info("Goodbye.");
    Ok(())
}

fn choose_action(context: &ShellContext) -> Result<Action, CourseError> {
    let wizard = context.wizard();
    let mut actions = Vec::new();
    if wizard.is_terminal() {
        actions.push(Action::Finalize);
    } else {
        actions.push(Action::Next);
    }
    if wizard.current_step() > 1 {
        actions.push(Action::Back);
    }
    if wizard
        .current_definition()
        .and_then(|step| editable_field(step.kind))
        .is_some()
    {
        actions.push(Action::Edit);
    }
    actions.extend([Action::Summary, Action::Restart, Action::Exit]);

    let labels: Vec<&str> = actions.iter().map(|action| action.label()).collect();
    let index = Select::with_theme(&context.theme)
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(actions[index])
}

fn editable_field(kind: StepKind) -> Option<WizardField> {
    kind.field()
        .filter(|field| *field != WizardField::ComplimentaryAddons)
}

fn edit_step(context: &mut ShellContext) -> Result<(), CourseError> {
    let Some(field) = context
        .wizard()
        .current_definition()
        .and_then(|step| editable_field(step.kind))
    else {
        return Ok(());
    };

    let table = context.engine.table();
    let listed = |id: &str, fallback| {
        format_money(table.price_of(field, id).unwrap_or(fallback), &context.locale)
    };
    let choices: Vec<(&'static str, String)> = match field {
        WizardField::Mentors => catalog::MENTORS
            .iter()
            .map(|mentor| {
                let price = listed(mentor.id, catalog::MENTOR_PRICE);
                (
                    mentor.id,
                    format!("{} ({}) - {price}", mentor.name, mentor.speciality),
                )
            })
            .collect(),
        other => catalog::options_for(other)
            .iter()
            .map(|option| {
                let price = listed(option.id, option.price);
                (option.id, format!("{} - {price}", option.title))
            })
            .collect(),
    };
    let labels: Vec<&str> = choices.iter().map(|(_, label)| label.as_str()).collect();
    let title = context
        .wizard()
        .current_definition()
        .map(|step| step.title)
        .unwrap_or_default();

    let selected = current_ids(context, field);
    let ids: Vec<&str> = if field.is_multi() {
        let defaults: Vec<bool> = choices
            .iter()
            .map(|(id, _)| selected.contains(id))
            .collect();
        MultiSelect::with_theme(&context.theme)
            .with_prompt(format!("{title} (space to toggle, enter to confirm)"))
            .items(&labels)
            .defaults(&defaults)
            .interact()?
            .into_iter()
            .map(|index| choices[index].0)
            .collect()
    } else {
        let default = choices
            .iter()
            .position(|(id, _)| selected.contains(id))
            .unwrap_or(0);
        let index = Select::with_theme(&context.theme)
            .with_prompt(title)
            .items(&labels)
            .default(default)
            .interact()?;
        vec![choices[index].0]
    };

    if ids.is_empty() && field != WizardField::WatPiPrep {
        output::warning("Pick at least one option to continue.");
    }
    context.apply(field, &ids, InputMode::Replace)
}

fn current_ids(context: &ShellContext, field: WizardField) -> Vec<&'static str> {
    match context.wizard().selection().value(field) {
        FieldValue::Tags(tags) => catalog::MENTORS
            .iter()
            .map(|mentor| mentor.id)
            .chain(catalog::options_for(field).iter().map(|option| option.id))
            .filter(|id| tags.contains(id))
            .collect(),
        FieldValue::Choice(id) => vec![id],
        FieldValue::Flags(ids) => ids,
        FieldValue::Fixed(ids) => ids.to_vec(),
    }
}

impl ShellContext {
    fn next_step_quiet(&mut self) {
        if !self.wizard.advance() {
            output::warning("Complete this step before continuing.");
        }
    }

    fn previous_step_quiet(&mut self) {
        self.wizard.retreat();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_on_step_has_nothing_to_edit() {
        assert_eq!(editable_field(StepKind::ComplimentaryAddons), None);
        assert_eq!(editable_field(StepKind::Review), None);
        assert_eq!(editable_field(StepKind::Books), Some(WizardField::Books));
    }
}

//! Turns option ids typed at the shell into [`SelectionUpdate`]s.

use crate::catalog;
use crate::errors::CourseError;
use crate::wizard::{
    BooksOption, ChoiceOption, DoubtChannel, LearningMode, SelectionUpdate, TagSet,
    TestSeriesTier, WatPiOption, WatPiPrep, WizardField,
};

/// Whether `select`/`set` replace the field or `toggle` flips one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Replace,
    Toggle,
}

fn single<'a>(field: WizardField, ids: &[&'a str]) -> Result<&'a str, CourseError> {
    match ids {
        [id] => Ok(*id),
        _ => Err(CourseError::InvalidArgument(format!(
            "`{field}` takes exactly one option"
        ))),
    }
}

fn choice<T: ChoiceOption>(ids: &[&str]) -> Result<T, CourseError> {
    let raw = single(T::FIELD, ids)?;
    let id = catalog::resolve_id(T::FIELD, raw)?;
    T::from_id(id).ok_or_else(|| CourseError::UnknownOption {
        field: T::FIELD.id(),
        value: raw.to_string(),
        suggestion: None,
    })
}

fn tags(field: WizardField, ids: &[&str]) -> Result<TagSet, CourseError> {
    ids.iter()
        .map(|raw| catalog::resolve_id(field, raw))
        .collect::<Result<Vec<_>, _>>()
        .map(TagSet::from_iter)
}

fn wat_pi(raw: &str) -> Result<WatPiOption, CourseError> {
    let id = catalog::resolve_id(WizardField::WatPiPrep, raw)?;
    WatPiOption::from_id(id).ok_or_else(|| CourseError::UnknownOption {
        field: WizardField::WatPiPrep.id(),
        value: raw.to_string(),
        suggestion: None,
    })
}

/// Builds the update for `field` from the ids the user typed. Every id is
/// checked against the catalog first.
pub fn build_update(
    field: WizardField,
    ids: &[&str],
    mode: InputMode,
) -> Result<SelectionUpdate, CourseError> {
    if ids.is_empty() && mode == InputMode::Toggle {
        return Err(CourseError::InvalidArgument(
            "`toggle` needs an option id".into(),
        ));
    }

    let update = match (field, mode) {
        (WizardField::FocusAreas, InputMode::Replace) => {
            SelectionUpdate::FocusAreas(tags(field, ids)?)
        }
        (WizardField::FocusAreas, InputMode::Toggle) => {
            SelectionUpdate::ToggleFocusArea(catalog::resolve_id(field, single(field, ids)?)?.into())
        }
        (WizardField::Mentors, InputMode::Replace) => SelectionUpdate::Mentors(tags(field, ids)?),
        (WizardField::Mentors, InputMode::Toggle) => {
            SelectionUpdate::ToggleMentor(catalog::resolve_id(field, single(field, ids)?)?.into())
        }
        (WizardField::WatPiPrep, InputMode::Replace) => {
            let mut prep = WatPiPrep::default();
            for raw in ids {
                prep.set(wat_pi(raw)?, true);
            }
            SelectionUpdate::WatPiPrep(prep)
        }
        (WizardField::WatPiPrep, InputMode::Toggle) => {
            SelectionUpdate::ToggleWatPi(wat_pi(single(field, ids)?)?)
        }
        (WizardField::LearningMode, _) => SelectionUpdate::LearningMode(choice::<LearningMode>(ids)?),
        (WizardField::Books, _) => SelectionUpdate::Books(choice::<BooksOption>(ids)?),
        (WizardField::TestSeries, _) => SelectionUpdate::TestSeries(choice::<TestSeriesTier>(ids)?),
        (WizardField::DoubtSolving, _) => {
            SelectionUpdate::DoubtSolving(choice::<DoubtChannel>(ids)?)
        }
        (WizardField::ComplimentaryAddons, _) => {
            return Err(CourseError::InvalidArgument(
                "complimentary add-ons are included with every plan".into(),
            ))
        }
    };
    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_resolves_every_id() {
        let update = build_update(WizardField::FocusAreas, &["QA", "lrdi"], InputMode::Replace).unwrap();
        assert_eq!(update, SelectionUpdate::FocusAreas(TagSet::from_iter(["qa", "lrdi"])));
    }

    #[test]
    fn single_choice_accepts_titles() {
        let update = build_update(WizardField::Books, &["Both (Combo)"], InputMode::Replace).unwrap();
        assert_eq!(update, SelectionUpdate::Books(BooksOption::Both));
    }

    #[test]
    fn single_choice_rejects_several_ids() {
        let err = build_update(WizardField::LearningMode, &["live", "hybrid"], InputMode::Replace)
            .unwrap_err();
        assert!(matches!(err, CourseError::InvalidArgument(_)));
    }

    #[test]
    fn unknown_ids_carry_a_suggestion() {
        let err = build_update(WizardField::TestSeries, &["advnced"], InputMode::Replace).unwrap_err();
        assert_eq!(err.suggestion(), Some("advanced"));
    }

    #[test]
    fn wat_pi_replace_enables_only_named_flags() {
        let update = build_update(WizardField::WatPiPrep, &["mockPI"], InputMode::Replace).unwrap();
        let SelectionUpdate::WatPiPrep(prep) = update else {
            panic!("expected a WAT/PI update");
        };
        assert!(prep.mock_pi);
        assert!(!prep.wat_practice);
    }

    #[test]
    fn complimentary_addons_are_read_only() {
        assert!(build_update(
            WizardField::ComplimentaryAddons,
            &["resume-building"],
            InputMode::Toggle
        )
        .is_err());
    }
}

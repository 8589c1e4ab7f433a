use super::selection::{
    BooksOption, DoubtChannel, LearningMode, SelectionRecord, TagSet, TestSeriesTier, WatPiOption,
    WatPiPrep, WizardField,
};

/// A single mutation of the [`SelectionRecord`]. One variant per field
/// (plus the toggles the step widgets use), each with a typed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionUpdate {
    FocusAreas(TagSet),
    ToggleFocusArea(String),
    LearningMode(LearningMode),
    Mentors(TagSet),
    ToggleMentor(String),
    Books(BooksOption),
    TestSeries(TestSeriesTier),
    DoubtSolving(DoubtChannel),
    WatPiPrep(WatPiPrep),
    ToggleWatPi(WatPiOption),
}

impl SelectionUpdate {
    /// The field this update writes.
    pub fn field(&self) -> WizardField {
        match self {
            SelectionUpdate::FocusAreas(_) | SelectionUpdate::ToggleFocusArea(_) => {
                WizardField::FocusAreas
            }
            SelectionUpdate::LearningMode(_) => WizardField::LearningMode,
            SelectionUpdate::Mentors(_) | SelectionUpdate::ToggleMentor(_) => WizardField::Mentors,
            SelectionUpdate::Books(_) => WizardField::Books,
            SelectionUpdate::TestSeries(_) => WizardField::TestSeries,
            SelectionUpdate::DoubtSolving(_) => WizardField::DoubtSolving,
            SelectionUpdate::WatPiPrep(_) | SelectionUpdate::ToggleWatPi(_) => {
                WizardField::WatPiPrep
            }
        }
    }

    pub(crate) fn apply(self, record: &mut SelectionRecord) {
        match self {
            SelectionUpdate::FocusAreas(areas) => record.focus_areas = areas,
            SelectionUpdate::ToggleFocusArea(id) => {
                record.focus_areas.toggle(&id);
            }
            SelectionUpdate::LearningMode(mode) => record.learning_mode = mode,
            SelectionUpdate::Mentors(mentors) => record.mentors = mentors,
            SelectionUpdate::ToggleMentor(id) => {
                record.mentors.toggle(&id);
            }
            SelectionUpdate::Books(books) => record.books = books,
            SelectionUpdate::TestSeries(tier) => record.test_series = tier,
            SelectionUpdate::DoubtSolving(channel) => record.doubt_solving = channel,
            SelectionUpdate::WatPiPrep(prep) => record.wat_pi_prep = prep,
            SelectionUpdate::ToggleWatPi(option) => {
                record.wat_pi_prep.toggle(option);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacing_updates_overwrite_the_whole_field() {
        let mut record = SelectionRecord::new();
        SelectionUpdate::FocusAreas(["qa", "lrdi"].into_iter().collect()).apply(&mut record);
        SelectionUpdate::FocusAreas(["varc"].into_iter().collect()).apply(&mut record);
        assert_eq!(record.focus_areas.iter().collect::<Vec<_>>(), vec!["varc"]);
    }

    #[test]
    fn toggles_flip_single_entries() {
        let mut record = SelectionRecord::new();
        SelectionUpdate::ToggleMentor("amit-verma".into()).apply(&mut record);
        SelectionUpdate::ToggleWatPi(WatPiOption::MockPi).apply(&mut record);
        assert!(record.mentors.contains("amit-verma"));
        assert!(record.wat_pi_prep.mock_pi);

        SelectionUpdate::ToggleMentor("amit-verma".into()).apply(&mut record);
        assert!(record.mentors.is_empty());
    }

    #[test]
    fn reports_owning_field() {
        assert_eq!(
            SelectionUpdate::ToggleWatPi(WatPiOption::WatPractice).field(),
            WizardField::WatPiPrep
        );
        assert_eq!(
            SelectionUpdate::Books(BooksOption::Printed).field(),
            WizardField::Books
        );
    }
}

//! The accumulated user selection and its typed option enums.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog;

/// Names each field of [`SelectionRecord`]. Also used as the key of the
/// price table and of the step plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardField {
    FocusAreas,
    LearningMode,
    Mentors,
    Books,
    TestSeries,
    DoubtSolving,
    WatPiPrep,
    ComplimentaryAddons,
}

impl WizardField {
    pub const ALL: [WizardField; 8] = [
        WizardField::FocusAreas,
        WizardField::LearningMode,
        WizardField::Mentors,
        WizardField::Books,
        WizardField::TestSeries,
        WizardField::DoubtSolving,
        WizardField::WatPiPrep,
        WizardField::ComplimentaryAddons,
    ];

    pub fn id(self) -> &'static str {
        match self {
            WizardField::FocusAreas => "focusAreas",
            WizardField::LearningMode => "learningMode",
            WizardField::Mentors => "mentors",
            WizardField::Books => "books",
            WizardField::TestSeries => "testSeries",
            WizardField::DoubtSolving => "doubtSolving",
            WizardField::WatPiPrep => "watPiPrep",
            WizardField::ComplimentaryAddons => "complimentaryAddons",
        }
    }

    /// Accepts the camelCase id as well as short command-line aliases.
    pub fn from_id(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', '_'], "");
        let field = match normalized.as_str() {
            "focusareas" | "focus" | "subjects" => WizardField::FocusAreas,
            "learningmode" | "mode" => WizardField::LearningMode,
            "mentors" | "mentor" => WizardField::Mentors,
            "books" | "book" => WizardField::Books,
            "testseries" | "tests" => WizardField::TestSeries,
            "doubtsolving" | "doubts" | "doubt" => WizardField::DoubtSolving,
            "watpiprep" | "watpi" => WizardField::WatPiPrep,
            "complimentaryaddons" | "addons" => WizardField::ComplimentaryAddons,
            _ => return None,
        };
        Some(field)
    }

    /// True for fields holding several values at once.
    pub fn is_multi(self) -> bool {
        matches!(
            self,
            WizardField::FocusAreas | WizardField::Mentors | WizardField::WatPiPrep
        )
    }
}

impl fmt::Display for WizardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single-choice field whose options are a closed set of string ids.
pub trait ChoiceOption: Copy + Eq + Default + 'static {
    /// Field this option belongs to.
    const FIELD: WizardField;

    /// Every selectable value, excluding the unset one.
    fn options() -> &'static [Self];

    fn id(self) -> &'static str;

    fn is_unset(self) -> bool {
        self == Self::default()
    }

    /// Parses an id. The empty string and `none` mean unset.
    fn from_id(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Some(Self::default());
        }
        Self::options()
            .iter()
            .copied()
            .find(|option| option.id().eq_ignore_ascii_case(trimmed))
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:expr, { $($variant:ident => $id:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            #[default]
            None,
            $($variant),+
        }

        impl ChoiceOption for $name {
            const FIELD: WizardField = $field;

            fn options() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn id(self) -> &'static str {
                match self {
                    $name::None => "none",
                    $($name::$variant => $id),+
                }
            }
        }

        // Unknown ids fall back to unset so a stray value prices at zero.
        impl From<String> for $name {
            fn from(value: String) -> Self {
                <$name as ChoiceOption>::from_id(&value).unwrap_or_default()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.id().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.id())
            }
        }
    };
}

choice_enum!(
    /// How classes are delivered.
    LearningMode, WizardField::LearningMode, {
        Live => "live",
        Hybrid => "hybrid",
        Recorded => "recorded",
    }
);

choice_enum!(
    /// Study material format.
    BooksOption, WizardField::Books, {
        Printed => "printed",
        Digital => "digital",
        Both => "both",
    }
);

choice_enum!(
    /// Mock test package tier.
    TestSeriesTier, WizardField::TestSeries, {
        Basic => "basic",
        Advanced => "advanced",
        Toppers => "toppers",
    }
);

choice_enum!(
    /// Channel used for doubt support.
    DoubtChannel, WizardField::DoubtSolving, {
        Whatsapp => "whatsapp",
        App => "app",
        Live => "live",
    }
);

/// Ordered set of string ids. Keeps first-insertion order and never holds
/// the same id twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    /// Adds `id`; returns false when it was already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != id);
        before != self.0.len()
    }

    /// Flips membership of `id` and returns whether it is now present.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.0.push(id.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl From<Vec<String>> for TagSet {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.0
    }
}

/// Independent interview-preparation add-ons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatPiOption {
    WatPractice,
    MockPi,
    IimAlumniPanel,
}

impl WatPiOption {
    pub const ALL: [WatPiOption; 3] = [
        WatPiOption::WatPractice,
        WatPiOption::MockPi,
        WatPiOption::IimAlumniPanel,
    ];

    pub fn id(self) -> &'static str {
        match self {
            WatPiOption::WatPractice => "watPractice",
            WatPiOption::MockPi => "mockPI",
            WatPiOption::IimAlumniPanel => "iimAlumniPanel",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.id().eq_ignore_ascii_case(trimmed))
    }
}

/// WAT/PI toggles. Each flag is priced on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WatPiPrep {
    #[serde(rename = "watPractice")]
    pub wat_practice: bool,
    #[serde(rename = "mockPI")]
    pub mock_pi: bool,
    #[serde(rename = "iimAlumniPanel")]
    pub iim_alumni_panel: bool,
}

impl WatPiPrep {
    pub fn get(&self, option: WatPiOption) -> bool {
        match option {
            WatPiOption::WatPractice => self.wat_practice,
            WatPiOption::MockPi => self.mock_pi,
            WatPiOption::IimAlumniPanel => self.iim_alumni_panel,
        }
    }

    pub fn set(&mut self, option: WatPiOption, enabled: bool) {
        match option {
            WatPiOption::WatPractice => self.wat_practice = enabled,
            WatPiOption::MockPi => self.mock_pi = enabled,
            WatPiOption::IimAlumniPanel => self.iim_alumni_panel = enabled,
        }
    }

    pub fn toggle(&mut self, option: WatPiOption) -> bool {
        let enabled = !self.get(option);
        self.set(option, enabled);
        enabled
    }

    /// Enabled options in display order.
    pub fn enabled(&self) -> impl Iterator<Item = WatPiOption> + '_ {
        WatPiOption::ALL
            .into_iter()
            .filter(move |option| self.get(*option))
    }

    pub fn any(&self) -> bool {
        self.enabled().next().is_some()
    }
}

/// Read-only view of a single field, used by the price engine to walk the
/// record generically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Tags(&'a TagSet),
    Choice(&'static str),
    Flags(Vec<&'static str>),
    Fixed(&'static [&'static str]),
}

/// Everything the user has chosen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionRecord {
    pub focus_areas: TagSet,
    pub learning_mode: LearningMode,
    pub mentors: TagSet,
    pub books: BooksOption,
    pub test_series: TestSeriesTier,
    pub doubt_solving: DoubtChannel,
    pub wat_pi_prep: WatPiPrep,
}

impl SelectionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bonus items bundled with every plan; not user-editable.
    pub fn complimentary_addons(&self) -> &'static [&'static str] {
        catalog::complimentary_addon_ids()
    }

    pub fn value(&self, field: WizardField) -> FieldValue<'_> {
        match field {
            WizardField::FocusAreas => FieldValue::Tags(&self.focus_areas),
            WizardField::LearningMode => FieldValue::Choice(self.learning_mode.id()),
            WizardField::Mentors => FieldValue::Tags(&self.mentors),
            WizardField::Books => FieldValue::Choice(self.books.id()),
            WizardField::TestSeries => FieldValue::Choice(self.test_series.id()),
            WizardField::DoubtSolving => FieldValue::Choice(self.doubt_solving.id()),
            WizardField::WatPiPrep => {
                FieldValue::Flags(self.wat_pi_prep.enabled().map(WatPiOption::id).collect())
            }
            WizardField::ComplimentaryAddons => FieldValue::Fixed(self.complimentary_addons()),
        }
    }

    /// Whether the field holds a non-empty value: a chosen option for
    /// single-choice fields, at least one entry for multi-choice fields.
    pub fn is_filled(&self, field: WizardField) -> bool {
        match self.value(field) {
            FieldValue::Tags(tags) => !tags.is_empty(),
            FieldValue::Choice(id) => id != "none",
            FieldValue::Flags(flags) => !flags.is_empty(),
            FieldValue::Fixed(_) => true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

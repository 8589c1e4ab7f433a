//! Static step plans. The order and titles of steps are data handed to the
//! controller, so each variant is configuration rather than code.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::selection::{SelectionRecord, WizardField};
use crate::errors::CourseError;
use crate::pricing::PriceTable;

/// What a step shows; the CLI picks its renderer from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    FocusAreas,
    LearningMode,
    Mentors,
    Books,
    TestSeries,
    DoubtSolving,
    WatPiPrep,
    ComplimentaryAddons,
    Review,
}

impl StepKind {
    /// Field the step edits, if any.
    pub fn field(self) -> Option<WizardField> {
        match self {
            StepKind::FocusAreas => Some(WizardField::FocusAreas),
            StepKind::LearningMode => Some(WizardField::LearningMode),
            StepKind::Mentors => Some(WizardField::Mentors),
            StepKind::Books => Some(WizardField::Books),
            StepKind::TestSeries => Some(WizardField::TestSeries),
            StepKind::DoubtSolving => Some(WizardField::DoubtSolving),
            StepKind::WatPiPrep => Some(WizardField::WatPiPrep),
            StepKind::ComplimentaryAddons => Some(WizardField::ComplimentaryAddons),
            StepKind::Review => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The owned field must be non-empty before moving on.
    Required,
    /// Add-on and review steps never block navigation.
    Optional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    pub kind: StepKind,
    pub title: &'static str,
    /// Short label shown under the progress indicator.
    pub label: &'static str,
    pub requirement: Requirement,
}

impl StepDefinition {
    pub const fn required(kind: StepKind, title: &'static str, label: &'static str) -> Self {
        Self {
            kind,
            title,
            label,
            requirement: Requirement::Required,
        }
    }

    pub const fn optional(kind: StepKind, title: &'static str, label: &'static str) -> Self {
        Self {
            kind,
            title,
            label,
            requirement: Requirement::Optional,
        }
    }

    /// Completion predicate for this step.
    pub fn is_satisfied(&self, selection: &SelectionRecord) -> bool {
        match (self.requirement, self.kind.field()) {
            (Requirement::Optional, _) | (Requirement::Required, None) => true,
            (Requirement::Required, Some(field)) => selection.is_filled(field),
        }
    }
}

/// Ordered, immutable list of steps numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPlan {
    name: &'static str,
    steps: Vec<StepDefinition>,
}

impl StepPlan {
    pub fn new(name: &'static str, steps: Vec<StepDefinition>) -> Result<Self, CourseError> {
        if steps.is_empty() {
            return Err(CourseError::InvalidArgument(format!(
                "step plan `{name}` has no steps"
            )));
        }
        Ok(Self { name, steps })
    }

    /// Six steps; no books, WAT/PI or complimentary step.
    pub fn standard() -> Self {
        Self {
            name: "standard",
            steps: vec![
                StepDefinition::required(StepKind::FocusAreas, "Choose Your Focus Areas", "Subjects"),
                StepDefinition::required(StepKind::LearningMode, "Select Learning Mode", "Mode"),
                StepDefinition::required(StepKind::Mentors, "Pick Your Mentors", "Mentors"),
                StepDefinition::required(StepKind::TestSeries, "Add Test Series", "Tests"),
                StepDefinition::required(StepKind::DoubtSolving, "Choose Doubt Solving", "Doubts"),
                StepDefinition::optional(StepKind::Review, "Review Your Course", "Review"),
            ],
        }
    }

    /// Eight steps ending on the complimentary add-ons.
    pub fn extended() -> Self {
        Self {
            name: "extended",
            steps: vec![
                StepDefinition::required(StepKind::FocusAreas, "Choose Your Focus Areas", "Subjects"),
                StepDefinition::required(StepKind::LearningMode, "Select Learning Mode", "Mode"),
                StepDefinition::required(StepKind::Mentors, "Pick Your Mentors", "Mentors"),
                StepDefinition::required(StepKind::Books, "Choose Your Books", "Books"),
                StepDefinition::required(StepKind::TestSeries, "Add Test Series", "Tests"),
                StepDefinition::required(StepKind::DoubtSolving, "Choose Doubt Solving", "Doubts"),
                StepDefinition::optional(StepKind::WatPiPrep, "WAT/PI Preparation", "WAT/PI"),
                StepDefinition::optional(
                    StepKind::ComplimentaryAddons,
                    "Complimentary Add-ons",
                    "Add-ons",
                ),
            ],
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step `number`, counting from 1.
    pub fn get(&self, number: usize) -> Option<&StepDefinition> {
        number.checked_sub(1).and_then(|idx| self.steps.get(idx))
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Number of the first step of `kind`, if the plan has one.
    pub fn position(&self, kind: StepKind) -> Option<usize> {
        self.steps
            .iter()
            .position(|step| step.kind == kind)
            .map(|idx| idx + 1)
    }

    /// Whether a cursor on `step` has reached the complimentary add-ons.
    pub fn complimentary_unlocked_at(&self, step: usize) -> bool {
        self.position(StepKind::ComplimentaryAddons)
            .map(|position| step >= position)
            .unwrap_or(false)
    }
}

/// Named pairing of a step plan and its price table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseVariant {
    Standard,
    #[default]
    Extended,
}

impl CourseVariant {
    pub fn from_id(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" | "six" | "6" => Some(CourseVariant::Standard),
            "extended" | "eight" | "8" => Some(CourseVariant::Extended),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            CourseVariant::Standard => "standard",
            CourseVariant::Extended => "extended",
        }
    }

    pub fn steps(self) -> StepPlan {
        match self {
            CourseVariant::Standard => StepPlan::standard(),
            CourseVariant::Extended => StepPlan::extended(),
        }
    }

    pub fn price_table(self) -> PriceTable {
        match self {
            CourseVariant::Standard => PriceTable::standard(),
            CourseVariant::Extended => PriceTable::extended(),
        }
    }
}

impl fmt::Display for CourseVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

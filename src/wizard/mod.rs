//! Course-configuration wizard: the selection record, typed updates, step
//! plans and the controller that navigates them.

pub mod controller;
pub mod progress;
pub mod selection;
pub mod steps;
pub mod update;

pub use controller::{FinalizedPlan, WizardController};
pub use progress::{coach_tip, ProgressSnapshot, StepIndicator, StepStatus};
pub use selection::{
    BooksOption, ChoiceOption, DoubtChannel, FieldValue, LearningMode, SelectionRecord, TagSet,
    TestSeriesTier, WatPiOption, WatPiPrep, WizardField,
};
pub use steps::{CourseVariant, Requirement, StepDefinition, StepKind, StepPlan};
pub use update::SelectionUpdate;

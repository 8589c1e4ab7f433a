use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::progress::{coach_tip, ProgressSnapshot};
use super::selection::SelectionRecord;
use super::steps::{StepDefinition, StepPlan};
use super::update::SelectionUpdate;
use crate::pricing::{PriceBreakdown, PriceEngine};

/// Read-only plan handed out by [`WizardController::finalize`] for an
/// external checkout service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedPlan {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub variant: &'static str,
    pub selection: SelectionRecord,
    pub breakdown: PriceBreakdown,
}

/// Owns the step cursor and the selection record.
///
/// The cursor is 1-based and always within `[1, total_steps]`. Navigation
/// requests that would leave that range, or move forward past an
/// unsatisfied step, are absorbed as no-ops.
#[derive(Debug, Clone)]
pub struct WizardController {
    plan: StepPlan,
    selection: SelectionRecord,
    current: usize,
}

impl WizardController {
    pub fn new(plan: StepPlan) -> Self {
        Self {
            plan,
            selection: SelectionRecord::default(),
            current: 1,
        }
    }

    pub fn plan(&self) -> &StepPlan {
        &self.plan
    }

    pub fn selection(&self) -> &SelectionRecord {
        &self.selection
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn total_steps(&self) -> usize {
        self.plan.len()
    }

    pub fn current_definition(&self) -> Option<&StepDefinition> {
        self.plan.get(self.current)
    }

    pub fn is_terminal(&self) -> bool {
        self.current >= self.plan.len()
    }

    /// Replaces one field of the selection. Never fails; values are trusted.
    pub fn update(&mut self, update: SelectionUpdate) {
        let field = update.field();
        update.apply(&mut self.selection);
        debug!(
            field = field.id(),
            step = self.current,
            can_proceed = self.can_proceed(self.current),
            "selection updated"
        );
    }

    /// Completion predicate for step `step`. Steps outside the plan are never
    /// satisfiable.
    pub fn can_proceed(&self, step: usize) -> bool {
        self.plan
            .get(step)
            .map(|definition| definition.is_satisfied(&self.selection))
            .unwrap_or(false)
    }

    /// Moves forward one step when allowed. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.current < self.plan.len() && self.can_proceed(self.current) {
            self.current += 1;
            debug!(step = self.current, "advanced");
            true
        } else {
            debug!(step = self.current, "advance ignored");
            false
        }
    }

    /// Moves back one step unless already on the first.
    pub fn retreat(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            debug!(step = self.current, "retreated");
            true
        } else {
            false
        }
    }

    /// Discards the selection and returns to step 1.
    pub fn restart(&mut self) {
        self.selection = SelectionRecord::default();
        self.current = 1;
        info!(plan = self.plan.name(), "wizard restarted");
    }

    /// True once the cursor is on or past the complimentary add-ons step.
    pub fn complimentary_unlocked(&self) -> bool {
        self.plan.complimentary_unlocked_at(self.current)
    }

    pub fn quote(&self, engine: &PriceEngine) -> PriceBreakdown {
        engine.quote(&self.selection, self.complimentary_unlocked())
    }

    pub fn progress(&self) -> ProgressSnapshot {
        ProgressSnapshot::new(self.current, self.plan.steps().iter().map(|step| step.label))
    }

    pub fn coach_tip(&self) -> &'static str {
        coach_tip(self.current)
    }

    /// Packages the finished plan. Only available on the terminal step and
    /// never changes wizard state.
    pub fn finalize(&self, engine: &PriceEngine) -> Option<FinalizedPlan> {
        if !self.is_terminal() {
            debug!(step = self.current, "finalize ignored before the last step");
            return None;
        }
        let plan = FinalizedPlan {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            variant: self.plan.name(),
            selection: self.selection.clone(),
            breakdown: self.quote(engine),
        };
        info!(plan_id = %plan.id, subtotal = plan.breakdown.subtotal.paise(), "plan finalized");
        Some(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::selection::{DoubtChannel, LearningMode, TestSeriesTier};
    use crate::wizard::CourseVariant;

    fn fill_standard(wizard: &mut WizardController) {
        wizard.update(SelectionUpdate::ToggleFocusArea("qa".into()));
        wizard.update(SelectionUpdate::LearningMode(LearningMode::Live));
        wizard.update(SelectionUpdate::ToggleMentor("rohit-singh".into()));
        wizard.update(SelectionUpdate::TestSeries(TestSeriesTier::Basic));
        wizard.update(SelectionUpdate::DoubtSolving(DoubtChannel::App));
    }

    #[test]
    fn starts_on_first_step() {
        let wizard = WizardController::new(StepPlan::extended());
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.total_steps(), 8);
        assert!(!wizard.can_proceed(1));
    }

    #[test]
    fn advance_is_gated_by_current_step() {
        let mut wizard = WizardController::new(StepPlan::standard());
        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), 1);

        wizard.update(SelectionUpdate::ToggleFocusArea("varc".into()));
        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn walks_to_the_end_and_stops() {
        let mut wizard = WizardController::new(CourseVariant::Standard.steps());
        fill_standard(&mut wizard);
        while wizard.advance() {}
        assert_eq!(wizard.current_step(), 6);
        assert!(wizard.is_terminal());
        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), 6);
    }

    #[test]
    fn retreat_stops_at_first_step() {
        let mut wizard = WizardController::new(StepPlan::standard());
        assert!(!wizard.retreat());
        wizard.update(SelectionUpdate::ToggleFocusArea("qa".into()));
        wizard.advance();
        assert!(wizard.retreat());
        assert!(!wizard.retreat());
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn out_of_range_steps_cannot_proceed() {
        let wizard = WizardController::new(StepPlan::standard());
        assert!(!wizard.can_proceed(0));
        assert!(!wizard.can_proceed(7));
    }

    #[test]
    fn finalize_is_only_offered_on_the_last_step() {
        let engine = PriceEngine::new(CourseVariant::Standard.price_table());
        let mut wizard = WizardController::new(CourseVariant::Standard.steps());
        assert!(wizard.finalize(&engine).is_none());

        fill_standard(&mut wizard);
        while wizard.advance() {}
        let before = wizard.selection().clone();
        let plan = wizard.finalize(&engine).expect("terminal step");
        assert_eq!(plan.variant, "standard");
        assert_eq!(plan.selection, before);
        assert_eq!(wizard.current_step(), 6);
    }

    #[test]
    fn restart_clears_everything() {
        let mut wizard = WizardController::new(StepPlan::standard());
        fill_standard(&mut wizard);
        wizard.advance();
        wizard.restart();
        assert_eq!(wizard.current_step(), 1);
        assert!(wizard.selection().is_empty());
    }

    #[test]
    fn complimentary_value_unlocks_on_its_step() {
        let mut wizard = WizardController::new(StepPlan::extended());
        fill_standard(&mut wizard);
        wizard.update(SelectionUpdate::Books(crate::wizard::BooksOption::Digital));
        for _ in 0..6 {
            assert!(!wizard.complimentary_unlocked());
            assert!(wizard.advance());
        }
        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), 8);
        assert!(wizard.complimentary_unlocked());
    }
}

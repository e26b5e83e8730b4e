use crate::core::field::FieldId;
use crate::core::sink::{NotificationSink, Submission};
use crate::core::state::FormState;
use crate::core::step::{StepCatalog, StepDefinition};
use crate::core::validation;
use crate::core::values::{FormErrors, FormValues};
use crate::core::view::StepView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: usize, to: usize },
    /// Validation failed; the step index did not change.
    Blocked { errors: usize },
    /// Already at the first (backward) or last (forward) step.
    AtBoundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Rejected { errors: usize },
    NotFinalStep,
}

/// Step-wise state machine over one form session.
///
/// Forward moves and submission are gated by the active step's validation;
/// backward moves never are. Edits only store values: an error shown for a
/// field stays until the next forward move or submit recomputes it.
#[derive(Debug, Clone)]
pub struct FormController {
    catalog: StepCatalog,
    state: FormState,
}

impl FormController {
    pub fn new(catalog: StepCatalog) -> Self {
        let state = FormState::new(&catalog);
        Self { catalog, state }
    }

    pub fn with_values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (FieldId, String)>,
    {
        for (field, value) in values {
            self.on_field_change(field, value);
        }
        self
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn step_index(&self) -> usize {
        self.state.step_index
    }

    pub fn step_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn active_step(&self) -> &StepDefinition {
        &self.catalog.steps()[self.state.step_index]
    }

    pub fn values(&self) -> &FormValues {
        &self.state.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.state.errors
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.state.values.text(field)
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.state.errors.get(field)
    }

    pub fn is_final_step(&self) -> bool {
        self.state.step_index == self.catalog.last_index()
    }

    pub fn can_go_previous(&self) -> bool {
        self.state.step_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_final_step()
    }

    pub fn view(&self) -> StepView<'_> {
        StepView {
            step_index: self.state.step_index,
            step_count: self.catalog.len(),
            active: self.active_step(),
            values: &self.state.values,
            errors: &self.state.errors,
            can_go_prev: self.can_go_previous(),
            can_go_next: self.can_go_next(),
            is_final_step: self.is_final_step(),
        }
    }

    /// Stores the value. Does not validate and does not clear errors.
    pub fn on_field_change(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        let stored = self.state.values.set(field, value);
        if !stored {
            tracing::warn!(field = %field, "ignoring change for field outside the step catalog");
        }
        stored
    }

    pub fn go_next(&mut self) -> Navigation {
        if !self.can_go_next() {
            return Navigation::AtBoundary;
        }

        let errors = self.validate_active_step();
        if !errors.is_empty() {
            let count = errors.len();
            tracing::debug!(step = self.state.step_index, errors = count, "next step blocked");
            self.state.errors = errors;
            return Navigation::Blocked { errors: count };
        }

        let from = self.state.step_index;
        self.state.step_index += 1;
        self.state.errors.clear();
        tracing::debug!(from, to = self.state.step_index, "moved to next step");
        Navigation::Moved {
            from,
            to: self.state.step_index,
        }
    }

    pub fn go_previous(&mut self) -> Navigation {
        if !self.can_go_previous() {
            return Navigation::AtBoundary;
        }

        let from = self.state.step_index;
        self.state.step_index -= 1;
        self.state.errors.clear();
        tracing::debug!(from, to = self.state.step_index, "moved to previous step");
        Navigation::Moved {
            from,
            to: self.state.step_index,
        }
    }

    pub fn submit(&mut self, sink: &mut dyn NotificationSink) -> SubmitOutcome {
        if !self.is_final_step() {
            return SubmitOutcome::NotFinalStep;
        }

        let errors = self.validate_active_step();
        if !errors.is_empty() {
            let count = errors.len();
            tracing::debug!(errors = count, "submission rejected");
            self.state.errors = errors;
            return SubmitOutcome::Rejected { errors: count };
        }

        self.state.errors.clear();
        let submission = Submission::new(self.state.values.clone());
        sink.notify(&submission);
        tracing::info!(fields = submission.values().len(), "form submitted");
        SubmitOutcome::Submitted
    }

    fn validate_active_step(&self) -> FormErrors {
        validation::validate(&self.active_step().fields, &self.state.values)
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(StepCatalog::standard())
    }
}

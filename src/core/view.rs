use crate::core::step::StepDefinition;
use crate::core::values::{FormErrors, FormValues};

/// Everything a presentation surface needs for one render.
#[derive(Debug, Clone, Copy)]
pub struct StepView<'a> {
    pub step_index: usize,
    pub step_count: usize,
    pub active: &'a StepDefinition,
    pub values: &'a FormValues,
    pub errors: &'a FormErrors,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub is_final_step: bool,
}

use crate::core::step::StepCatalog;
use crate::core::values::{FormErrors, FormValues};

/// Mutable session data of one form. Owned by a single controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub step_index: usize,
    pub values: FormValues,
    pub errors: FormErrors,
}

impl FormState {
    pub fn new(catalog: &StepCatalog) -> Self {
        Self {
            step_index: 0,
            values: FormValues::for_catalog(catalog),
            errors: FormErrors::new(),
        }
    }
}

use crate::core::field::FieldId;
use crate::error::{FormError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    pub title: String,
    pub fields: Vec<FieldId>,
}

impl StepDefinition {
    pub fn new(title: impl Into<String>, fields: Vec<FieldId>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.fields.contains(&field)
    }

    pub fn position(&self, field: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }
}

/// Ordered, read-only list of steps. Never empty; every field belongs to
/// exactly one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCatalog {
    steps: Vec<StepDefinition>,
}

impl StepCatalog {
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self> {
        if steps.is_empty() {
            return Err(FormError::EmptyCatalog);
        }

        let mut seen: Vec<FieldId> = Vec::new();
        for field in steps.iter().flat_map(|step| step.fields.iter().copied()) {
            if seen.contains(&field) {
                return Err(FormError::DuplicateField {
                    field: field.to_string(),
                });
            }
            seen.push(field);
        }

        Ok(Self { steps })
    }

    /// Name and email, then age and address, then city and country.
    pub fn standard() -> Self {
        Self {
            steps: vec![
                StepDefinition::new("Step 1", vec![FieldId::Name, FieldId::Email]),
                StepDefinition::new("Step 2", vec![FieldId::Age, FieldId::Address]),
                StepDefinition::new("Step 3", vec![FieldId::City, FieldId::Country]),
            ],
        }
    }

    pub fn get(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// All fields in step order.
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.steps.iter().flat_map(|step| step.fields.iter().copied())
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.steps.iter().any(|step| step.contains(field))
    }
}

impl Default for StepCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::{StepCatalog, StepDefinition};
    use crate::core::field::FieldId;
    use crate::error::FormError;

    #[test]
    fn standard_catalog_layout() {
        let catalog = StepCatalog::standard();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.last_index(), 2);

        let titles: Vec<&str> = catalog.steps().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Step 1", "Step 2", "Step 3"]);

        let fields: Vec<FieldId> = catalog.fields().collect();
        assert_eq!(fields, FieldId::ALL);
    }

    #[test]
    fn out_of_range_read_is_none() {
        assert!(StepCatalog::standard().get(3).is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(StepCatalog::new(Vec::new()), Err(FormError::EmptyCatalog)));
    }

    #[test]
    fn field_in_two_steps_is_rejected() {
        let result = StepCatalog::new(vec![
            StepDefinition::new("A", vec![FieldId::Name]),
            StepDefinition::new("B", vec![FieldId::Email, FieldId::Name]),
        ]);
        match result {
            Err(FormError::DuplicateField { field }) => assert_eq!(field, "name"),
            other => panic!("expected duplicate field error, got {other:?}"),
        }
    }

    #[test]
    fn field_twice_in_one_step_is_rejected() {
        let result = StepCatalog::new(vec![StepDefinition::new(
            "A",
            vec![FieldId::Age, FieldId::Age],
        )]);
        assert!(matches!(result, Err(FormError::DuplicateField { .. })));
    }
}

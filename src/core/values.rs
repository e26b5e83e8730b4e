use crate::core::field::FieldId;
use crate::core::step::StepCatalog;
use indexmap::IndexMap;
use serde::Serialize;

/// Current value of every field in the catalog, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FormValues {
    values: IndexMap<FieldId, String>,
}

impl FormValues {
    pub fn for_catalog(catalog: &StepCatalog) -> Self {
        Self {
            values: catalog.fields().map(|id| (id, String::new())).collect(),
        }
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Empty string for fields that are not tracked.
    pub fn text(&self, field: FieldId) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Overwrites a tracked field. Untracked fields are left out so the key
    /// set stays equal to the catalog's fields.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        match self.values.get_mut(&field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.values.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.values.iter().map(|(id, value)| (*id, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Messages for the failing fields of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FormErrors {
    errors: IndexMap<FieldId, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn first_field(&self) -> Option<FieldId> {
        self.errors.keys().next().copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.errors.iter().map(|(id, msg)| (*id, msg.as_str()))
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl FromIterator<(FieldId, String)> for FormErrors {
    fn from_iter<T: IntoIterator<Item = (FieldId, String)>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

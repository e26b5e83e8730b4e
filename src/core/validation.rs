use crate::core::field::{FieldId, FieldKind};
use crate::core::values::{FormErrors, FormValues};
use crate::input::validators::{self, Validator};

pub const INVALID_EMAIL: &str = "Valid email is required";
pub const INVALID_AGE: &str = "Valid age is required";

/// Ordered rule chain for one field. The first failing rule supplies the
/// field's message.
pub fn rules_for(field: FieldId) -> Vec<Validator> {
    let mut rules = vec![validators::required(field.label())];
    match field.kind() {
        FieldKind::Email => rules.push(validators::email(INVALID_EMAIL)),
        FieldKind::Number => rules.push(validators::number(INVALID_AGE)),
        FieldKind::Text => {}
    }
    rules
}

pub fn validate_field(field: FieldId, value: &str) -> Result<(), String> {
    validators::run(&rules_for(field), value)
}

/// Errors for exactly the failing fields among `step_fields`, in step order.
pub fn validate(step_fields: &[FieldId], values: &FormValues) -> FormErrors {
    step_fields
        .iter()
        .filter_map(|field| {
            validate_field(*field, values.text(*field))
                .err()
                .map(|message| (*field, message))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{INVALID_AGE, INVALID_EMAIL, validate, validate_field};
    use crate::core::field::FieldId;
    use crate::core::step::StepCatalog;
    use crate::core::values::FormValues;

    fn values_with(pairs: &[(FieldId, &str)]) -> FormValues {
        let mut values = FormValues::for_catalog(&StepCatalog::standard());
        for (id, value) in pairs {
            values.set(*id, *value);
        }
        values
    }

    #[test]
    fn every_empty_field_reports_required() {
        let values = values_with(&[]);
        let errors = validate(&FieldId::ALL, &values);

        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(FieldId::Name), Some("Name is required"));
        assert_eq!(errors.get(FieldId::Email), Some("Email is required"));
        assert_eq!(errors.get(FieldId::Age), Some("Age is required"));
        assert_eq!(errors.get(FieldId::Address), Some("Address is required"));
        assert_eq!(errors.get(FieldId::City), Some("City is required"));
        assert_eq!(errors.get(FieldId::Country), Some("Country is required"));
    }

    #[test]
    fn email_shape_is_checked_after_presence() {
        assert_eq!(validate_field(FieldId::Email, "bad"), Err(INVALID_EMAIL.to_string()));
        assert_eq!(validate_field(FieldId::Email, "a@b.com"), Ok(()));
    }

    #[test]
    fn age_must_be_numeric() {
        assert_eq!(validate_field(FieldId::Age, "abc"), Err(INVALID_AGE.to_string()));
        assert_eq!(validate_field(FieldId::Age, "30"), Ok(()));
    }

    #[test]
    fn shape_rules_apply_only_to_their_field() {
        assert_eq!(validate_field(FieldId::Name, "abc"), Ok(()));
        assert_eq!(validate_field(FieldId::Address, "no-at-sign"), Ok(()));
    }

    #[test]
    fn only_listed_fields_are_checked() {
        let values = values_with(&[(FieldId::Name, "")]);
        let errors = validate(&[FieldId::Age, FieldId::Address], &values);

        let fields: Vec<FieldId> = errors.fields().collect();
        assert_eq!(fields, [FieldId::Age, FieldId::Address]);
        assert!(!errors.contains(FieldId::Name));
    }

    #[test]
    fn passing_step_yields_no_errors() {
        let values = values_with(&[(FieldId::Name, "Ann"), (FieldId::Email, "ann@x.com")]);
        assert!(validate(&[FieldId::Name, FieldId::Email], &values).is_empty());
    }

    #[test]
    fn same_input_same_result() {
        let values = values_with(&[(FieldId::Email, "bad")]);
        let first = validate(&[FieldId::Name, FieldId::Email], &values);
        let second = validate(&[FieldId::Name, FieldId::Email], &values);
        assert_eq!(first, second);
    }
}

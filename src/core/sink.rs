use crate::core::values::FormValues;
use serde::Serialize;

/// Snapshot of all values handed over once the final step validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Submission {
    values: FormValues,
}

impl Submission {
    pub fn new(values: FormValues) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

pub trait NotificationSink {
    fn notify(&mut self, submission: &Submission);
}

impl<F> NotificationSink for F
where
    F: FnMut(&Submission),
{
    fn notify(&mut self, submission: &Submission) {
        self(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::{NotificationSink, Submission};
    use crate::core::field::FieldId;
    use crate::core::step::StepCatalog;
    use crate::core::values::FormValues;

    #[test]
    fn closures_are_sinks() {
        let mut received = Vec::new();
        let mut sink = |s: &Submission| received.push(s.clone());
        let submission = Submission::new(FormValues::for_catalog(&StepCatalog::standard()));

        sink.notify(&submission);
        assert_eq!(received, vec![submission]);
    }

    #[test]
    fn pretty_json_lists_fields_in_order() {
        let mut values = FormValues::for_catalog(&StepCatalog::standard());
        values.set(FieldId::Name, "Ann");
        let json = Submission::new(values).to_pretty_json();

        let name_at = json.find("\"name\": \"Ann\"").expect("name line");
        let country_at = json.find("\"country\": \"\"").expect("country line");
        assert!(name_at < country_at);
    }
}

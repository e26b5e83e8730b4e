use crate::config::OutputFormat;
use crate::core::sink::{NotificationSink, Submission};
use std::io::{self, Write};

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Notification sink for the terminal surface. The payload is held while
/// the form owns the screen and written out once the screen is restored.
#[derive(Debug)]
pub struct TerminalAcknowledgement {
    format: OutputFormat,
    pending: Option<Submission>,
}

impl TerminalAcknowledgement {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<&Submission> {
        self.pending.as_ref()
    }

    pub fn emit<W: Write>(&mut self, out: &mut W) -> io::Result<bool> {
        let Some(submission) = self.pending.take() else {
            return Ok(false);
        };

        match self.format {
            OutputFormat::Text => {
                writeln!(out, "{SUCCESS_MESSAGE}")?;
                writeln!(out, "{}", submission.to_pretty_json())?;
            }
            OutputFormat::Json => writeln!(out, "{}", submission.to_json())?,
        }
        out.flush()?;
        Ok(true)
    }
}

impl NotificationSink for TerminalAcknowledgement {
    fn notify(&mut self, submission: &Submission) {
        self.pending = Some(submission.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalAcknowledgement;
    use crate::config::OutputFormat;
    use crate::core::field::FieldId;
    use crate::core::sink::{NotificationSink, Submission};
    use crate::core::step::StepCatalog;
    use crate::core::values::FormValues;

    fn submission() -> Submission {
        let mut values = FormValues::for_catalog(&StepCatalog::standard());
        values.set(FieldId::Name, "Ann");
        Submission::new(values)
    }

    #[test]
    fn nothing_pending_writes_nothing() {
        let mut ack = TerminalAcknowledgement::new(OutputFormat::Text);
        let mut out = Vec::new();
        assert!(!ack.emit(&mut out).expect("emit"));
        assert!(out.is_empty());
    }

    #[test]
    fn text_format_prints_message_and_pretty_json() {
        let mut ack = TerminalAcknowledgement::new(OutputFormat::Text);
        ack.notify(&submission());
        let mut out = Vec::new();
        assert!(ack.emit(&mut out).expect("emit"));

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("Form submitted successfully!\n{\n"));
        assert!(text.contains("  \"name\": \"Ann\""));
        assert!(ack.pending().is_none());
    }

    #[test]
    fn json_format_prints_one_line() {
        let mut ack = TerminalAcknowledgement::new(OutputFormat::Json);
        ack.notify(&submission());
        let mut out = Vec::new();
        ack.emit(&mut out).expect("emit");

        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("{\"name\":\"Ann\""));
    }
}

use crate::terminal::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    NextField,
    PrevField,
    /// Next field, or leave the step from its last field.
    Confirm,
    NextStep,
    PrevStep,
    Submit,
    DeleteWord,
    InputKey(KeyEvent),
    Tick,
}

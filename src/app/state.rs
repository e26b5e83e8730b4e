use crate::core::controller::FormController;
use crate::core::field::FieldId;
use crate::input::TextInput;
use indexmap::IndexMap;

/// Presentation-side state: the controller plus one edit buffer per field
/// and the focused row of the active step.
pub struct AppState {
    pub controller: FormController,
    inputs: IndexMap<FieldId, TextInput>,
    focus: usize,
    should_exit: bool,
    submitted: bool,
}

impl AppState {
    pub fn new(controller: FormController) -> Self {
        let inputs = controller
            .values()
            .iter()
            .map(|(field, value)| {
                let mut input = TextInput::new(field);
                input.set_value(value);
                (field, input)
            })
            .collect();

        Self {
            controller,
            inputs,
            focus: 0,
            should_exit: false,
            submitted: false,
        }
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> Option<FieldId> {
        self.controller.active_step().fields.get(self.focus).copied()
    }

    pub fn focused_input(&self) -> Option<&TextInput> {
        self.focused_field().and_then(|field| self.inputs.get(&field))
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        let field = self.focused_field()?;
        self.inputs.get_mut(&field)
    }

    pub fn input(&self, field: FieldId) -> Option<&TextInput> {
        self.inputs.get(&field)
    }

    pub fn active_field_count(&self) -> usize {
        self.controller.active_step().fields.len()
    }

    pub fn is_on_last_field(&self) -> bool {
        self.focus + 1 >= self.active_field_count()
    }

    pub fn move_focus(&mut self, direction: isize) {
        let len = self.active_field_count() as isize;
        if len == 0 {
            return;
        }
        let current = self.focus as isize;
        self.focus = ((current + direction + len) % len) as usize;
    }

    pub fn reset_focus(&mut self) {
        self.focus = 0;
    }

    pub fn focus_field(&mut self, field: FieldId) {
        if let Some(idx) = self.controller.active_step().position(field) {
            self.focus = idx;
        }
    }

    /// Pushes the focused buffer's text into the form values.
    pub fn commit_focused(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if let Some(input) = self.inputs.get(&field) {
            self.controller.on_field_change(field, input.value());
        }
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn mark_submitted(&mut self) {
        self.submitted = true;
        self.should_exit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::core::controller::FormController;
    use crate::core::field::FieldId;

    #[test]
    fn inputs_are_seeded_from_values() {
        let controller = FormController::default().with_values([(FieldId::City, "Oz".to_string())]);
        let state = AppState::new(controller);
        assert_eq!(state.input(FieldId::City).map(|i| i.value()), Some("Oz"));
        assert_eq!(state.input(FieldId::City).map(|i| i.cursor()), Some(2));
    }

    #[test]
    fn focus_wraps_within_step() {
        let mut state = AppState::new(FormController::default());
        assert_eq!(state.focused_field(), Some(FieldId::Name));
        state.move_focus(1);
        assert_eq!(state.focused_field(), Some(FieldId::Email));
        state.move_focus(1);
        assert_eq!(state.focused_field(), Some(FieldId::Name));
        state.move_focus(-1);
        assert_eq!(state.focused_field(), Some(FieldId::Email));
        assert!(state.is_on_last_field());
    }
}

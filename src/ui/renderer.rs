use crate::core::field::{FieldId, FieldKind};
use crate::core::view::StepView;
use crate::input::TextInput;
use crate::terminal::CursorPos;
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

const FOCUS_MARKER: &str = "› ";
const BLANK_MARKER: &str = "  ";
const HINT: &str =
    "Tab/Shift+Tab field · Enter continue · PgUp/PgDn step · Ctrl+S submit · Esc quit";

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    pub show_hints: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self { show_hints: true }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RendererConfig,
    theme: Theme,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            theme: Theme::default_theme(),
        }
    }

    /// `focused` is the edit buffer of the field holding the cursor, if any.
    pub fn render(&self, view: &StepView<'_>, focused: Option<&TextInput>) -> RenderFrame {
        let mut frame = RenderFrame::default();

        frame.lines.push(vec![
            Span::styled(view.active.title.clone(), self.theme.title),
            Span::styled(
                format!("  ({}/{})", view.step_index + 1, view.step_count),
                self.theme.progress,
            ),
        ]);
        frame.lines.push(Vec::new());

        for field in &view.active.fields {
            let is_focused = focused.is_some_and(|input| input.field() == *field);
            let label = format!("{}: ", field.label());
            let marker = if is_focused { FOCUS_MARKER } else { BLANK_MARKER };
            let label_style = if is_focused {
                self.theme.focused_label
            } else {
                self.theme.label
            };

            if let Some(input) = focused.filter(|_| is_focused) {
                let col = UnicodeWidthStr::width(marker)
                    + UnicodeWidthStr::width(label.as_str())
                    + input.cursor_width();
                frame.cursor = Some(CursorPos {
                    col: col.min(u16::MAX as usize) as u16,
                    row: frame.lines.len().min(u16::MAX as usize) as u16,
                });
            }

            let value = view.values.text(*field);
            let value_span = if value.is_empty() {
                Span::styled(placeholder(*field), self.theme.placeholder)
            } else {
                Span::new(value)
            };
            frame.lines.push(vec![
                Span::styled(marker, label_style),
                Span::styled(label, label_style),
                value_span,
            ]);

            if let Some(error) = view.errors.get(*field) {
                frame
                    .lines
                    .push(vec![Span::styled(format!("    ! {error}"), self.theme.error)]);
            }
        }

        frame.lines.push(Vec::new());
        frame.lines.push(self.button_row(view));

        if self.config.show_hints {
            frame.lines.push(Vec::new());
            frame.lines.push(vec![Span::styled(HINT, self.theme.hint)]);
        }

        frame
    }

    fn button_row(&self, view: &StepView<'_>) -> SpanLine {
        let mut buttons = Vec::new();
        if view.can_go_prev {
            buttons.push(Span::styled("[ Previous ]", self.theme.previous_button));
        }
        if view.can_go_next {
            buttons.push(Span::styled("[ Next ]", self.theme.next_button));
        }
        if view.is_final_step {
            buttons.push(Span::styled("[ Submit ]", self.theme.submit_button));
        }

        let mut line = Vec::with_capacity(buttons.len() * 2);
        for (idx, button) in buttons.into_iter().enumerate() {
            if idx > 0 {
                line.push(Span::new("  "));
            }
            line.push(button);
        }
        line
    }
}

fn placeholder(field: FieldId) -> &'static str {
    match field.kind() {
        FieldKind::Email => "name@example.com",
        FieldKind::Number => "0",
        FieldKind::Text => "",
    }
}

#[cfg(test)]
mod tests {
    use super::{Renderer, RendererConfig};
    use crate::core::controller::FormController;
    use crate::core::field::FieldId;
    use crate::input::TextInput;
    use crate::terminal::CursorPos;
    use crate::ui::span::line_text;

    fn rendered_text(controller: &FormController, focused: Option<&TextInput>) -> Vec<String> {
        Renderer::new(RendererConfig { show_hints: false })
            .render(&controller.view(), focused)
            .lines
            .iter()
            .map(line_text)
            .collect()
    }

    #[test]
    fn first_step_shows_next_only() {
        let controller = FormController::default();
        let lines = rendered_text(&controller, None);

        assert_eq!(lines[0], "Step 1  (1/3)");
        assert!(lines.iter().any(|l| l == "  Name: "));
        assert!(lines.iter().any(|l| l == "  Email: name@example.com"));
        assert_eq!(lines.last().map(String::as_str), Some("[ Next ]"));
    }

    #[test]
    fn errors_render_under_their_field() {
        let mut controller = FormController::default();
        controller.on_field_change(FieldId::Email, "bad");
        controller.go_next();
        let lines = rendered_text(&controller, None);

        let name_row = lines.iter().position(|l| l == "  Name: ").expect("name row");
        assert_eq!(lines[name_row + 1], "    ! Name is required");
        let email_row = lines.iter().position(|l| l == "  Email: bad").expect("email row");
        assert_eq!(lines[email_row + 1], "    ! Valid email is required");
    }

    #[test]
    fn final_step_shows_previous_and_submit() {
        let mut controller = FormController::default().with_values([
            (FieldId::Name, "Ann".to_string()),
            (FieldId::Email, "ann@x.com".to_string()),
            (FieldId::Age, "30".to_string()),
            (FieldId::Address, "1 Rd".to_string()),
        ]);
        controller.go_next();
        controller.go_next();
        let lines = rendered_text(&controller, None);

        assert_eq!(lines[0], "Step 3  (3/3)");
        assert_eq!(lines.last().map(String::as_str), Some("[ Previous ]  [ Submit ]"));
    }

    #[test]
    fn cursor_follows_focused_input() {
        let mut controller = FormController::default();
        controller.on_field_change(FieldId::Email, "ann");
        let mut input = TextInput::new(FieldId::Email);
        input.set_value("ann");

        let frame = Renderer::default().render(&controller.view(), Some(&input));
        // title, blank, name row, email row
        assert_eq!(frame.cursor, Some(CursorPos { col: 2 + 7 + 3, row: 3 }));
        assert_eq!(line_text(&frame.lines[3]), "› Email: ann");
    }

    #[test]
    fn hints_are_optional() {
        let controller = FormController::default();
        let with = Renderer::new(RendererConfig { show_hints: true }).render(&controller.view(), None);
        let without =
            Renderer::new(RendererConfig { show_hints: false }).render(&controller.view(), None);
        assert_eq!(with.lines.len(), without.lines.len() + 2);
    }
}

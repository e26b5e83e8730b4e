use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub progress: Style,
    pub label: Style,
    pub focused_label: Style,
    pub placeholder: Style,
    pub error: Style,
    pub previous_button: Style,
    pub next_button: Style,
    pub submit_button: Style,
    pub hint: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().color(Color::Cyan).bold(),
            progress: Style::new().color(Color::DarkGrey),
            label: Style::new(),
            focused_label: Style::new().color(Color::White).bold(),
            placeholder: Style::new().color(Color::DarkGrey),
            error: Style::new().color(Color::Red),
            previous_button: Style::new().color(Color::Yellow).bold(),
            next_button: Style::new().color(Color::Cyan).bold(),
            submit_button: Style::new().color(Color::Green).bold(),
            hint: Style::new().color(Color::DarkGrey),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

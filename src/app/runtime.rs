use crate::app::command::Command;
use crate::app::key_bindings::KeyBindings;
use crate::app::reducer::{Effect, Reducer};
use crate::app::state::AppState;
use crate::core::sink::NotificationSink;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::io;
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Submitted,
    Cancelled,
}

pub struct Runtime<S: NotificationSink> {
    state: AppState,
    terminal: Terminal,
    key_bindings: KeyBindings,
    renderer: Renderer,
    sink: S,
}

impl<S: NotificationSink> Runtime<S> {
    pub fn new(state: AppState, terminal: Terminal, sink: S) -> Self {
        Self {
            state,
            terminal,
            key_bindings: KeyBindings::new(),
            renderer: Renderer::default(),
            sink,
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn run(&mut self) -> io::Result<RunOutcome> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.state.should_exit() {
                let event = self.terminal.poll_event(POLL_TIMEOUT)?;
                self.dispatch_terminal_event(event)?;
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)?;

        if self.state.is_submitted() {
            Ok(RunOutcome::Submitted)
        } else {
            tracing::info!(step = self.state.controller.step_index(), "form closed without submitting");
            Ok(RunOutcome::Cancelled)
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn dispatch_terminal_event(&mut self, event: TerminalEvent) -> io::Result<()> {
        match event {
            TerminalEvent::Resize(size) => {
                self.terminal.set_size(size);
                self.render()
            }
            TerminalEvent::Key(key) => {
                let command = self
                    .key_bindings
                    .resolve(key)
                    .unwrap_or(Command::InputKey(key));
                tracing::trace!(?command, "key resolved");
                self.process_command(command)
            }
            TerminalEvent::Tick => self.process_command(Command::Tick),
        }
    }

    fn process_command(&mut self, command: Command) -> io::Result<()> {
        let effects = Reducer::reduce(&mut self.state, command);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;

        for effect in effects {
            match effect {
                Effect::RequestRender => render_requested = true,
                Effect::Acknowledge(submission) => self.sink.notify(&submission),
            }
        }

        if render_requested && !self.state.should_exit() {
            self.render()?;
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let view = self.state.controller.view();
        let frame = self.renderer.render(&view, self.state.focused_input());
        self.terminal.render_frame(&frame)
    }
}

use crate::app::command::Command;
use crate::app::state::AppState;
use crate::core::controller::{Navigation, SubmitOutcome};
use crate::core::sink::Submission;
use crate::input::KeyResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RequestRender,
    /// Hand the payload to the notification sink.
    Acknowledge(Submission),
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, command: Command) -> Vec<Effect> {
        match command {
            Command::Exit => {
                state.request_exit();
                vec![]
            }
            Command::NextField => {
                state.move_focus(1);
                vec![Effect::RequestRender]
            }
            Command::PrevField => {
                state.move_focus(-1);
                vec![Effect::RequestRender]
            }
            Command::Confirm => {
                if !state.is_on_last_field() {
                    state.move_focus(1);
                    return vec![Effect::RequestRender];
                }
                if state.controller.is_final_step() {
                    Self::handle_submit(state)
                } else {
                    Self::handle_next_step(state)
                }
            }
            Command::NextStep => Self::handle_next_step(state),
            Command::PrevStep => Self::handle_prev_step(state),
            Command::Submit => Self::handle_submit(state),
            Command::DeleteWord => {
                let result = state
                    .focused_input_mut()
                    .map(|input| input.delete_word())
                    .unwrap_or(KeyResult::Ignored);
                Self::after_edit(state, result)
            }
            Command::InputKey(key) => {
                let result = state
                    .focused_input_mut()
                    .map(|input| input.handle_key(key))
                    .unwrap_or(KeyResult::Ignored);
                Self::after_edit(state, result)
            }
            Command::Tick => vec![],
        }
    }

    fn after_edit(state: &mut AppState, result: KeyResult) -> Vec<Effect> {
        match result {
            KeyResult::Changed => {
                state.commit_focused();
                vec![Effect::RequestRender]
            }
            KeyResult::Moved => vec![Effect::RequestRender],
            KeyResult::Ignored => vec![],
        }
    }

    fn handle_next_step(state: &mut AppState) -> Vec<Effect> {
        match state.controller.go_next() {
            Navigation::Moved { .. } => state.reset_focus(),
            Navigation::Blocked { .. } => Self::focus_first_error(state),
            Navigation::AtBoundary => return vec![],
        }
        vec![Effect::RequestRender]
    }

    fn handle_prev_step(state: &mut AppState) -> Vec<Effect> {
        match state.controller.go_previous() {
            Navigation::Moved { .. } => {
                state.reset_focus();
                vec![Effect::RequestRender]
            }
            Navigation::Blocked { .. } | Navigation::AtBoundary => vec![],
        }
    }

    fn handle_submit(state: &mut AppState) -> Vec<Effect> {
        let mut received: Option<Submission> = None;
        let mut sink = |submission: &Submission| received = Some(submission.clone());

        match state.controller.submit(&mut sink) {
            SubmitOutcome::Submitted => {
                state.mark_submitted();
                let mut effects = vec![Effect::RequestRender];
                if let Some(submission) = received {
                    effects.push(Effect::Acknowledge(submission));
                }
                effects
            }
            SubmitOutcome::Rejected { .. } => {
                Self::focus_first_error(state);
                vec![Effect::RequestRender]
            }
            SubmitOutcome::NotFinalStep => vec![],
        }
    }

    fn focus_first_error(state: &mut AppState) {
        if let Some(field) = state.controller.errors().first_field() {
            state.focus_field(field);
        }
    }
}

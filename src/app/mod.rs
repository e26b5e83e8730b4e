pub mod acknowledgement;
pub mod command;
pub mod key_bindings;
pub mod reducer;
pub mod runtime;
pub mod state;

pub use acknowledgement::TerminalAcknowledgement;
pub use command::Command;
pub use key_bindings::{KeyBinding, KeyBindings};
pub use reducer::{Effect, Reducer};
pub use runtime::{RunOutcome, Runtime};
pub use state::AppState;

pub mod text_input;
pub mod validators;

pub use text_input::{KeyResult, TextInput};

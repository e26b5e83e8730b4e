pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use crate::core::controller;
pub use crate::core::field;
pub use crate::core::sink;
pub use crate::core::step;
pub use crate::core::validation;
pub use crate::core::values;

pub use crate::core::{
    FieldId, FormController, FormErrors, FormValues, Navigation, NotificationSink, StepCatalog,
    StepDefinition, StepView, Submission, SubmitOutcome,
};
pub use error::{FormError, Result};

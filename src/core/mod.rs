pub mod controller;
pub mod field;
pub mod sink;
pub mod state;
pub mod step;
pub mod validation;
pub mod values;
pub mod view;

pub use controller::{FormController, Navigation, SubmitOutcome};
pub use field::{FieldId, FieldKind};
pub use sink::{NotificationSink, Submission};
pub use state::FormState;
pub use step::{StepCatalog, StepDefinition};
pub use values::{FormErrors, FormValues};
pub use view::StepView;

//! Error types for stepform.
//!
//! Field validation failures are not errors: they live in
//! [`FormErrors`](crate::core::values::FormErrors) and are shown to the user.
//! `FormError` covers everything that stops the program from running.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stepform operations
pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Debug, Error)]
pub enum FormError {
    /// A field name that is not one of the known form fields
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A `field=value` assignment without the `=`
    #[error("Invalid assignment '{0}', expected FIELD=VALUE")]
    InvalidAssignment(String),

    /// A step catalog with no steps
    #[error("Step catalog must contain at least one step")]
    EmptyCatalog,

    /// The same field listed twice in a catalog
    #[error("Field '{field}' appears more than once in the step catalog")]
    DuplicateField { field: String },

    /// Configuration file could not be read or parsed
    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Configuration text that is not valid YAML for the schema
    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

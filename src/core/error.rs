use thiserror::Error;

/// Errors that can occur while building a bill or producing its document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BillingError {
    /// One or more checkout preconditions failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The printable document could not be serialized.
    #[error("render error: {0}")]
    Render(String),

    /// Configuration could not be parsed or holds invalid values.
    #[error("config error: {0}")]
    Config(String),

    /// Invoice number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Writing the generated document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single failed precondition with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the offending field (e.g. "customer.name").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collapse a list of precondition failures into a single error.
pub(crate) fn join_validation_errors(errors: &[ValidationError]) -> BillingError {
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    BillingError::Validation(msg)
}

use thiserror::Error;

/// Error types for the ddm-rs library.
///
/// The first four variants describe broken model definitions or invalid
/// model configurations. They are not meant to be retried: callers building
/// a model should surface them immediately.
#[derive(Error, Debug)]
pub enum DdmError {
    /// A dependence variant is declared incorrectly.
    #[error("Invalid declaration of {variant}: {reason}")]
    InvalidDeclaration { variant: String, reason: String },

    /// Constructor arguments do not match the declared parameter set.
    #[error(
        "{family}/{variant}: provided {provided:?} arguments, expected {expected:?}{}",
        mismatch_detail(.provided, .expected)
    )]
    ParameterMismatch {
        family: String,
        variant: String,
        provided: Vec<String>,
        expected: Vec<String>,
    },

    /// Attempt to add, rebind or remove a parameter that cannot change.
    #[error("{variant} is immutable: cannot modify attribute '{attribute}'")]
    ImmutableAttribute { variant: String, attribute: String },

    /// A capability was invoked on a dependence that does not implement it.
    #[error("{family}/{variant} does not implement {capability}")]
    UnimplementedCapability {
        family: String,
        variant: String,
        capability: String,
    },

    /// A required experimental condition was not supplied.
    #[error("{variant} requires condition '{condition}'")]
    MissingCondition { variant: String, condition: String },

    /// No registered variant matches the requested name.
    #[error("Unknown {family} variant '{name}'")]
    UnknownVariant { family: String, name: String },

    /// Invalid input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn mismatch_detail(provided: &[String], expected: &[String]) -> String {
    let unexpected: Vec<&str> = provided
        .iter()
        .filter(|p| !expected.contains(p))
        .map(String::as_str)
        .collect();
    let missing: Vec<&str> = expected
        .iter()
        .filter(|e| !provided.contains(e))
        .map(String::as_str)
        .collect();

    let mut detail = String::new();
    if !unexpected.is_empty() {
        detail.push_str(&format!("; unexpected {:?}", unexpected));
    }
    if !missing.is_empty() {
        detail.push_str(&format!("; missing {:?}", missing));
    }
    detail
}

/// Result type alias for ddm-rs operations.
pub type Result<T> = std::result::Result<T, DdmError>;

/// A key that is absent from one of the static tables.
///
/// This is an expected outcome of a lookup; tools report it to the agent as
/// an `error` payload rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("No user found for email '{0}'.")]
    UserNotFound(String),

    #[error("Unknown service '{name}'. Known services: {}.", .known.join(", "))]
    UnknownService {
        name: String,
        /// Every service name the catalog knows, sorted ascending.
        known: Vec<String>,
    },
}

/// Malformed ticket-creation arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field '{0}'.")]
    MissingField(&'static str),

    #[error("Invalid severity '{0}'. Expected one of: low, medium, high.")]
    InvalidSeverity(String),

    #[error("Malformed arguments: {0}")]
    Malformed(String),
}

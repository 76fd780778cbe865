//! Error types for configuration and host collaborators

/// Errors surfaced by the interpreter crate.
///
/// Matching and dispatch never fail; these only come out of configuration
/// loading and from collaborator calls before the dispatcher swallows them.
#[derive(Debug, thiserror::Error)]
pub enum InterpreterError {
    #[error("Unknown intent key: {0}")]
    UnknownIntent(String),

    #[error("Duplicate intent in catalog: {0}")]
    DuplicateIntent(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Collaborator rejected request: {0}")]
    Collaborator(String),
}

pub type Result<T> = std::result::Result<T, InterpreterError>;

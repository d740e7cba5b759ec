//! Error types for Hello Reducer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HelloError>;

#[derive(Error, Debug)]
pub enum HelloError {
    #[error("Reducer error: {0}")]
    Reducer(#[from] ReducerError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Malformed action: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failure tied to one line of an action log
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        source: Box<HelloError>,
    },
}

impl HelloError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HelloError::InvalidInput(_) => 3,
            HelloError::Reducer(_) => 3,
            HelloError::Json(_) => 3,
            HelloError::Config(_) => 1,
            HelloError::Io(_) => 1,
            HelloError::Logging(_) => 1,
            HelloError::AtLine { source, .. } => source.exit_code(),
        }
    }

    /// Attach the 1-based line number of the input that caused this error
    pub fn at_line(self, line: usize) -> Self {
        HelloError::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

/// Failures of the untyped action path.
///
/// Typed `Action` values can never fail; these only arise when an action
/// arrives as a tagged record from outside the program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReducerError {
    #[error("Unknown action: {kind}")]
    UnrecognizedAction { kind: String },

    #[error("Action '{kind}' is missing required field '{field}'")]
    MissingPayload { kind: String, field: &'static str },
}

impl ReducerError {
    /// The action tag that could not be applied
    pub fn kind(&self) -> &str {
        match self {
            ReducerError::UnrecognizedAction { kind } => kind,
            ReducerError::MissingPayload { kind, .. } => kind,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

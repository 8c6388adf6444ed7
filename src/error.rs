//! Error types.
//!
//! The library reports failures as [`ScoreError`]; the binary maps them onto
//! [`AppError`], which carries the process exit code.

use thiserror::Error;

/// Result alias for scoring operations.
pub type Result<T> = std::result::Result<T, ScoreError>;

/// Failures of the scoring pipeline and metrics evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Missing required field: `{0}`")]
    MissingField(String),

    #[error("Training schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Cannot compute metrics over an empty input")]
    EmptyMetricsInput,

    #[error("Input batch contains no records")]
    EmptyBatch,

    #[error("Invalid value in `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Non-finite feature `{column}` for Id {id}")]
    NonFiniteFeature { id: i64, column: String },
}

impl ScoreError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Process-level error: a message plus the exit code `hps` terminates with.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<ScoreError> for AppError {
    fn from(err: ScoreError) -> Self {
        let exit_code = match err {
            ScoreError::MissingField(_)
            | ScoreError::InvalidValue { .. }
            | ScoreError::EmptyMetricsInput
            | ScoreError::EmptyBatch => 3,
            ScoreError::SchemaMismatch(_) | ScoreError::NonFiniteFeature { .. } => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

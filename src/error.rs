//! Error types for recomendar operations.
//!
//! The prediction path itself is total and never fails; errors arise only
//! at the configuration and stream-parsing seams.

use std::fmt;

/// Main error type for recomendar operations.
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::InvalidHyperparameter {
///     param: "k".to_string(),
///     value: "0".to_string(),
///     constraint: "k >= 1".to_string(),
/// };
/// assert!(err.to_string().contains("Invalid hyperparameter"));
/// ```
#[derive(Debug)]
pub enum RecomendarError {
    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Malformed line in a rating stream.
    Parse {
        /// 1-based line number in the input stream
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// I/O error while reading or writing a rating stream.
    Io(std::io::Error),
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomendarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter {param} = {value}, constraint: {constraint}"
                )
            }
            RecomendarError::Parse { line, message } => {
                write!(f, "Parse error at line {line}: {message}")
            }
            RecomendarError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for RecomendarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecomendarError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RecomendarError {
    fn from(err: std::io::Error) -> Self {
        RecomendarError::Io(err)
    }
}

/// Result type alias for recomendar operations.
pub type Result<T> = std::result::Result<T, RecomendarError>;

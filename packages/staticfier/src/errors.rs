//! Error types for staticfier
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for staticfier operations
#[derive(Debug, Error)]
pub enum StaticfierError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source could not be parsed (syntax errors, unsupported encoding)
    #[error("Parse error in {path}: {message}")]
    Parse { path: String, message: String },

    /// Grammar could not be loaded into the parser
    #[error("Language error: {0}")]
    Language(String),

    /// A method declaration reached the decider without a resolved self-identity
    #[error("Unresolved declaration: method '{method}' in '{declaring_type}' has no resolved method identity")]
    UnresolvedDeclaration {
        method: String,
        declaring_type: String,
    },

    /// Two text edits target overlapping byte ranges
    #[error("Edit conflict: {first_start}..{first_end} overlaps {second_start}..{second_end}")]
    EditConflict {
        first_start: usize,
        first_end: usize,
        second_start: usize,
        second_end: usize,
    },

    /// A text edit does not fit the source it is applied to
    #[error("Edit out of bounds: {start}..{end} in a source of {len} bytes")]
    EditOutOfBounds { start: usize, end: usize, len: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl StaticfierError {
    /// Create a parse error
    pub fn parse_error(path: impl Into<String>, message: impl Into<String>) -> Self {
        StaticfierError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an unresolved declaration error
    pub fn unresolved(method: impl Into<String>, declaring_type: impl Into<String>) -> Self {
        StaticfierError::UnresolvedDeclaration {
            method: method.into(),
            declaring_type: declaring_type.into(),
        }
    }
}

/// Result type alias for staticfier operations
pub type Result<T> = std::result::Result<T, StaticfierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_declaration_message() {
        let err = StaticfierError::unresolved("helper", "Widget");
        assert_eq!(
            err.to_string(),
            "Unresolved declaration: method 'helper' in 'Widget' has no resolved method identity"
        );
    }

    #[test]
    fn test_parse_error_message() {
        let err = StaticfierError::parse_error("A.java", "syntax error at 3:7");
        assert_eq!(err.to_string(), "Parse error in A.java: syntax error at 3:7");
    }
}

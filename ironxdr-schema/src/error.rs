//! Error types for parsing and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for front-end operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input file could not be read.
    #[error("{}: {source}", path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Error inside a specific input file.
    #[error("{}: {source}", path.display())]
    InFile {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: Box<ParseError>,
    },

    /// Token does not fit the grammar.
    #[error("{line}:{column}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// Line (1-based).
        line: usize,
        /// Column (1-based).
        column: usize,
        /// What the grammar allowed.
        expected: String,
        /// What was found.
        found: String,
    },

    /// Input ended inside a definition.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What the grammar allowed.
        expected: String,
    },

    /// Character that cannot start a token.
    #[error("{line}:{column}: invalid character '{ch}'")]
    InvalidCharacter {
        /// Line (1-based).
        line: usize,
        /// Column (1-based).
        column: usize,
        /// Offending character.
        ch: char,
    },

    /// `/*` without matching `*/`.
    #[error("{line}: unterminated comment")]
    UnterminatedComment {
        /// Line where the comment starts.
        line: usize,
    },

    /// Valid IDL that this implementation does not support.
    #[error("{line}:{column}: unsupported {feature}")]
    Unsupported {
        /// Line (1-based).
        line: usize,
        /// Column (1-based).
        column: usize,
        /// Description of the construct.
        feature: String,
    },

    /// Semantic validation error.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Error type for semantic validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Identifier defined twice.
    #[error("duplicate definition: '{name}'")]
    DuplicateDefinition {
        /// Identifier.
        name: String,
    },

    /// Field declared twice in one struct or union.
    #[error("duplicate field '{field}' in '{parent}'")]
    DuplicateField {
        /// Enclosing definition.
        parent: String,
        /// Field name.
        field: String,
    },

    /// Case label used by two arms.
    #[error("duplicate case label '{label}' in union '{union}'")]
    DuplicateCase {
        /// Union name.
        union: String,
        /// Label.
        label: String,
    },

    /// More than one `default:` arm.
    #[error("union '{union}' has more than one default arm")]
    MultipleDefaults {
        /// Union name.
        union: String,
    },

    /// Other validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates an unexpected token error.
    pub fn unexpected(
        line: usize,
        column: usize,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::UnexpectedToken {
            line,
            column,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates an unsupported construct error.
    pub fn unsupported(line: usize, column: usize, feature: impl Into<String>) -> Self {
        Self::Unsupported {
            line,
            column,
            feature: feature.into(),
        }
    }

    /// Attaches the input path to this error.
    #[must_use]
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            err @ (Self::Io { .. } | Self::InFile { .. }) => err,
            err => Self::InFile {
                path: path.into(),
                source: Box::new(err),
            },
        }
    }
}

impl SchemaError {
    /// Creates a duplicate definition error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateDefinition { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_display() {
        let err = ParseError::unexpected(3, 7, "';'", "'}'");
        assert_eq!(err.to_string(), "3:7: expected ';', found '}'");
    }

    #[test]
    fn test_in_file_wraps_once() {
        let err = ParseError::unsupported(1, 1, "type 'quadruple'").in_file("a.x");
        assert_eq!(err.to_string(), "a.x: 1:1: unsupported type 'quadruple'");

        let again = err.in_file("b.x");
        assert!(again.to_string().starts_with("a.x:"));
    }

    #[test]
    fn test_schema_error_transparent() {
        let err: ParseError = SchemaError::duplicate("Foo").into();
        assert_eq!(err.to_string(), "duplicate definition: 'Foo'");
    }
}

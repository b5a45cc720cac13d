//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ironxdr_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more inputs failed to read or parse; nothing was generated.
    #[error("{failures} input(s) failed, no code generated")]
    FrontEnd {
        /// Number of failed inputs.
        failures: usize,
    },
}

impl CodegenError {
    /// Creates a front-end failure error.
    pub fn front_end(failures: usize) -> Self {
        Self::FrontEnd { failures }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_end_display() {
        assert_eq!(
            CodegenError::front_end(2).to_string(),
            "2 input(s) failed, no code generated"
        );
    }

    #[test]
    fn test_from_parse_error() {
        let err: CodegenError = ironxdr_schema::ParseError::UnterminatedComment { line: 4 }.into();
        assert_eq!(err.to_string(), "parse error: 4: unterminated comment");
    }
}

//! Error types for IronXDR runtime operations.

use thiserror::Error;

/// Error type for runtime operations on generated values.
#[derive(Debug, Error)]
pub enum XdrError {
    /// A variable-length value would exceed its declared bound.
    #[error("length {len} exceeds bound {bound}")]
    BoundExceeded {
        /// Requested length.
        len: usize,
        /// Declared maximum length.
        bound: u32,
    },

    /// A boolean was set from a wire value other than 0 or 1.
    #[error("bool must be 0 or 1, got {value}")]
    InvalidBool {
        /// Offending wire value.
        value: u32,
    },

    /// A string was set from bytes that are not valid UTF-8.
    #[error("invalid UTF-8 in string: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for IronXDR runtime operations.
pub type Result<T> = std::result::Result<T, XdrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = XdrError::BoundExceeded { len: 12, bound: 10 };
        assert_eq!(err.to_string(), "length 12 exceeds bound 10");

        let err = XdrError::InvalidBool { value: 7 };
        assert_eq!(err.to_string(), "bool must be 0 or 1, got 7");
    }

    #[test]
    fn test_utf8_error_from() {
        let utf8 = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: XdrError = utf8.into();
        assert!(matches!(err, XdrError::InvalidUtf8(_)));
    }
}

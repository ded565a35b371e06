//! Error types for data-preparation operations

use thiserror::Error;

/// Result type alias for data-preparation operations
pub type Result<T> = std::result::Result<T, TextPrepError>;

/// Error types for argument validation and data preparation
#[derive(Error, Debug)]
pub enum TextPrepError {
    /// A well-typed value outside the accepted enum or range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A value whose runtime type or capability set does not match the contract
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// A value whose dimensionality or axis sizes violate the shape contract
    #[error("Shape error: {0}")]
    Shape(String),

    /// A broken invariant between related arguments; signals a caller bug
    /// rather than a single bad value
    #[error("Contract violation: {0}")]
    ContractViolation(String),
}

impl TextPrepError {
    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new type mismatch error
    pub fn type_mismatch<S: Into<String>>(msg: S) -> Self {
        Self::TypeMismatch(msg.into())
    }

    /// Create a new shape error
    pub fn shape<S: Into<String>>(msg: S) -> Self {
        Self::Shape(msg.into())
    }

    /// Create a new contract violation error
    pub fn contract_violation<S: Into<String>>(msg: S) -> Self {
        Self::ContractViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_kind_and_message() {
        let err = TextPrepError::invalid_argument("bad orient");
        assert_eq!(err.to_string(), "Invalid argument: bad orient");

        let err = TextPrepError::type_mismatch("expected str");
        assert_eq!(err.to_string(), "Type mismatch: expected str");

        let err = TextPrepError::shape("too many axes");
        assert_eq!(err.to_string(), "Shape error: too many axes");

        let err = TextPrepError::contract_violation("split sizes disagree");
        assert_eq!(err.to_string(), "Contract violation: split sizes disagree");
    }
}

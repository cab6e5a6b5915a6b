use std::fmt;

/// Error types for the Matex engine
///
/// The combinators are total functions over their documented input shapes
/// with one exception: the bounded-operator combinators require a range
/// bound and reject any other bound shape before producing output.
#[derive(Debug, Clone, PartialEq)]
pub enum MatexError {
    /// A combinator received an argument outside its documented shape
    InvalidArgument(String),
}

impl MatexError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl fmt::Display for MatexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatexError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for MatexError {}

// src/error.rs

use thiserror::Error;

/// Errors raised by the algorithm programs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    /// The argument lies outside the domain the algorithm is defined on.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },
}

impl AlgoError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        AlgoError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

//! Name validation errors for registers and labels.

use thiserror::Error;

/// Errors produced when a string is not a valid register or label name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Register names are `X`, `Y` or `Z` followed by optional digits.
    #[error("invalid register name '{0}'")]
    InvalidRegister(String),

    /// Label names are one or more ASCII letters or digits.
    #[error("invalid label name '{0}'")]
    InvalidLabel(String),
}

//! Validation error types

use std::fmt;

/// Validation error for registration input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `password` and `confirmPassword` differ
    PasswordMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PasswordMismatch => write!(f, "Password and confirm password do not match"),
        }
    }
}

impl std::error::Error for ValidationError {}

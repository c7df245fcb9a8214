//! Contract error types for contacts service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Contacts service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactsError {
    /// An identifier-scoped operation found no matching contact
    #[error("contact not found: {id}")]
    NotFound {
        /// Requested contact id
        id: i32,
    },
    /// Input rejected before reaching the store
    #[error("validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },
    /// Underlying persistence failure, carried through unmodified
    #[error("storage error: {message}")]
    Storage {
        /// Original error text
        message: String,
    },
}

impl ContactsError {
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for ContactsError {
    fn from(error: anyhow::Error) -> Self {
        Self::Storage {
            message: format!("{:#}", error),
        }
    }
}

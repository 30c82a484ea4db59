//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Domain errors (not found, duplicate, dialog)   │
//! │  └── InputError       - Malformed or missing field text                │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What the webview sees (serialized)             │
//! │                                                                         │
//! │  Flow: InputError → CoreError → ApiError → Webview                     │
//! │                      DbError ──┘                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::Field;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised by the form and dialog logic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No row carries the requested product id.
    ///
    /// ## When This Occurs
    /// - Modify or Delete pressed with an id that is not in the table
    /// - The row was deleted while its modify dialog was open
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Save pressed on a dialog that was already saved or dismissed.
    #[error("Modify dialog is no longer open")]
    DialogClosed,

    /// Input error (wraps InputError).
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

// =============================================================================
// Input Error
// =============================================================================

/// Errors parsing raw field text.
///
/// The form keeps whatever the user typed when one of these is returned,
/// so the message names the field and echoes the rejected value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A required field is empty.
    #[error("{field} is required")]
    Required { field: Field },

    /// Field should hold a whole number.
    #[error("{field} must be a whole number, got '{value}'")]
    NotAnInteger { field: Field, value: String },

    /// Field should hold a decimal number.
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: Field, value: String },

    /// A list line did not start with `ID: <number>, `.
    #[error("List entry has no product id: '{line}'")]
    MalformedListing { line: String },
}

impl InputError {
    /// The field that failed to parse, if the error belongs to one.
    pub fn field(&self) -> Option<Field> {
        match self {
            InputError::Required { field }
            | InputError::NotAnInteger { field, .. }
            | InputError::NotANumber { field, .. } => Some(*field),
            InputError::MalformedListing { .. } => None,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for parsing operations.
pub type InputResult<T> = Result<T, InputError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::ProductNotFound(7).to_string(),
            "Product not found: 7"
        );
    }

    #[test]
    fn test_input_error_messages() {
        let err = InputError::Required {
            field: Field::ProductId,
        };
        assert_eq!(err.to_string(), "Product ID is required");

        let err = InputError::NotAnInteger {
            field: Field::Quantity,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Quantity must be a whole number, got 'abc'");
        assert_eq!(err.field(), Some(Field::Quantity));
    }

    #[test]
    fn test_input_converts_to_core_error() {
        let input_err = InputError::Required {
            field: Field::ProductId,
        };
        let core_err: CoreError = input_err.into();
        assert!(matches!(core_err, CoreError::Input(_)));
    }
}

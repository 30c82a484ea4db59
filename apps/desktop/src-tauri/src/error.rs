//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  invoke('submit_add', { fields })                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  FormController                                                  │  │
//! │  │         │                                                        │  │
//! │  │  Bad field text? ─── InputError ────────────┐                    │  │
//! │  │         │                                   │                    │  │
//! │  │  Id taken? ───────── DbError::Unique... ────┤                    │  │
//! │  │         │                                   ▼                    │  │
//! │  │  Id missing? ─────── NOT_FOUND ────────► ApiError ──────────────►│  │
//! │  │         │                                                        │  │
//! │  │  Anything else ───── STORAGE_ERROR (with SQLite message)         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) { alert(e.title + ': ' + e.message) }                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error ends only the action that raised it. The form keeps its
//! inputs and the table is left as it was.

use serde::Serialize;
use stockroom_core::{CoreError, InputError};
use stockroom_db::DbError;
use thiserror::Error;

/// Dialog title for malformed input.
pub const INPUT_ERROR_TITLE: &str = "Input Error";
/// Dialog title for not-found and duplicate errors.
pub const ERROR_TITLE: &str = "Error";
/// Dialog title for storage failures.
pub const DATABASE_ERROR_TITLE: &str = "Database Error";

/// API error returned from Tauri commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "DUPLICATE_KEY",
///   "title": "Error",
///   "message": "Product ID already exists. Use a unique Product ID."
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Title of the error dialog
    pub title: String,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Missing or non-numeric field
    InputError,

    /// Insert with an id that already exists
    DuplicateKey,

    /// Modify/delete target is absent
    NotFound,

    /// Any other persistence failure
    StorageError,

    /// Misuse of the UI state (e.g. saving a closed dialog)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, title: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError {
            code,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Creates an input error.
    pub fn input(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InputError, INPUT_ERROR_TITLE, message)
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, ERROR_TITLE, message)
    }

    /// Creates a duplicate key error.
    pub fn duplicate(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::DuplicateKey, ERROR_TITLE, message)
    }

    /// Creates a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::StorageError, DATABASE_ERROR_TITLE, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, ERROR_TITLE, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { .. } => {
                ApiError::duplicate("Product ID already exists. Use a unique Product ID.")
            }
            DbError::NotFound { entity, id } => {
                ApiError::not_found(format!("{} ID {} not found.", entity, id))
            }
            other => {
                tracing::error!(error = %other, "Database operation failed");
                ApiError::storage(other.to_string())
            }
        }
    }
}

/// Converts input errors to API errors.
impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        ApiError::input(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(_) => ApiError::not_found("Product ID not found."),
            CoreError::DialogClosed => {
                ApiError::internal("The Modify Product window is no longer open.")
            }
            CoreError::Input(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::Field;

    #[test]
    fn test_db_error_mapping() {
        let err: ApiError = DbError::duplicate("product_id", "1").into();
        assert_eq!(err.code, ErrorCode::DuplicateKey);
        assert_eq!(err.title, "Error");

        let err: ApiError = DbError::QueryFailed("database is locked".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.title, "Database Error");
        assert!(err.message.contains("database is locked"));
    }

    #[test]
    fn test_input_error_mapping() {
        let err: ApiError = InputError::NotAnInteger {
            field: Field::Quantity,
            value: "abc".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::InputError);
        assert_eq!(err.title, "Input Error");
        assert_eq!(err.message, "Quantity must be a whole number, got 'abc'");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(ApiError::not_found("Product ID not found.")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["title"], "Error");
        assert_eq!(json["message"], "Product ID not found.");
    }
}

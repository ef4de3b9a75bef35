//! Error handling for AMY
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::forms::ValidationErrors;

/// Main error type for the AMY backend
#[derive(Error, Debug)]
pub enum AmyError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Data fix {name} failed: {reason}")]
    DataFix { name: String, reason: String },

    #[error("Data fix {name} requires schema migration {required_version}, database is at {current_version}")]
    SchemaTooOld { name: String, required_version: i64, current_version: i64 },

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {ident}")]
    EventNotFound { ident: String },

    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<ValidationErrors> for AmyError {
    fn from(errors: ValidationErrors) -> Self {
        AmyError::Validation(errors)
    }
}

/// A unique key and the form error reported when a write collides with it
#[derive(Debug, Clone, Copy)]
pub struct UniqueConstraint {
    pub name: &'static str,
    /// `None` for keys spanning several fields
    pub field: Option<&'static str>,
    pub message: &'static str,
}

impl AmyError {
    /// Report a violation of one of `constraints` as a validation error
    ///
    /// Other errors, and violations of unlisted constraints, pass through.
    pub fn on_unique_violation(self, constraints: &[UniqueConstraint]) -> Self {
        match self.violated_constraint(constraints) {
            Some(constraint) => {
                let mut errors = ValidationErrors::default();
                match constraint.field {
                    Some(field) => errors.add(field, constraint.message),
                    None => errors.add_non_field(constraint.message),
                }
                AmyError::Validation(errors)
            }
            None => self,
        }
    }

    fn violated_constraint<'c>(&self, constraints: &'c [UniqueConstraint]) -> Option<&'c UniqueConstraint> {
        match self {
            AmyError::Database(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                let name = db_err.constraint()?;
                constraints.iter().find(|constraint| constraint.name == name)
            }
            _ => None,
        }
    }
}

/// Result type alias for AMY operations
pub type Result<T> = std::result::Result<T, AmyError>;

impl AmyError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AmyError::Database(_) => ErrorSeverity::Critical,
            AmyError::Migration(_) => ErrorSeverity::Critical,
            AmyError::DataFix { .. } => ErrorSeverity::Critical,
            AmyError::SchemaTooOld { .. } => ErrorSeverity::Critical,
            AmyError::Config(_) => ErrorSeverity::Critical,
            AmyError::Registry(_) => ErrorSeverity::Critical,
            AmyError::EventNotFound { .. } => ErrorSeverity::Info,
            AmyError::Validation(_) => ErrorSeverity::Info,
            AmyError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// HTTP status returned to clients for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AmyError::EventNotFound { .. } => StatusCode::NOT_FOUND,
            AmyError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AmyError::InvalidInput(_) | AmyError::Csv(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AmyError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let AmyError::Validation(errors) = self {
            return (status, Json(errors)).into_response();
        }

        if self.severity() >= ErrorSeverity::Error {
            tracing::error!(error = %self, severity = %self.severity(), "Request failed");
        }

        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_unprocessable_entity() {
        let mut errors = ValidationErrors::default();
        errors.add_non_field("broken");
        let err = AmyError::from(errors);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.severity(), ErrorSeverity::Info);
    }

    #[test]
    fn test_data_fix_errors_are_critical() {
        let err = AmyError::DataFix {
            name: "0002_fix_truncated_language_names".to_string(),
            reason: "ambiguous".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("0002_fix_truncated_language_names"));
    }

    #[test]
    fn test_unique_mapping_leaves_other_errors_alone() {
        let constraints = [UniqueConstraint {
            name: "events_slug_key",
            field: Some("slug"),
            message: "Event with this Slug already exists.",
        }];

        let err = AmyError::Database(sqlx::Error::RowNotFound).on_unique_violation(&constraints);
        assert!(matches!(err, AmyError::Database(sqlx::Error::RowNotFound)));

        let err = AmyError::InvalidInput("bad".to_string()).on_unique_violation(&constraints);
        assert!(matches!(err, AmyError::InvalidInput(_)));
    }

    #[test]
    fn test_not_found_is_404() {
        let err = AmyError::EventNotFound { ident: "my-event".to_string() };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}

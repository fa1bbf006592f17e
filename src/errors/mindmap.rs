//! Mindmap error types

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use super::MAX_NAME_LENGTH;

/// Mindmap-related errors
#[derive(Error, Debug)]
pub enum MindMapError {
    /// Mindmap not found by ID
    #[error("Mindmap not found")]
    NotFound(i64),

    /// Owning project does not exist (foreign key rejected by storage)
    #[error("Project {0} does not exist")]
    ProjectNotFound(i32),

    /// Request data failed validation
    #[error("{field}: {message}")]
    Validation {
        /// Offending request field
        field: String,
        /// Human-readable reason
        message: String,
    },

    /// Stored graph payload could not be (de)serialised
    #[error("Graph data serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl MindMapError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MindMapError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Validate a mindmap name
    pub fn check_name(name: &str) -> Result<(), Self> {
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(Self::validation(
                "name",
                format!("Mindmap name too long (max {} chars)", MAX_NAME_LENGTH),
            ));
        }
        Ok(())
    }

    /// Classify an insert failure, recognising foreign key violations on `project_id`
    pub fn from_insert(err: DbErr, project_id: i32) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                MindMapError::ProjectNotFound(project_id)
            }
            _ => MindMapError::Database(err),
        }
    }

    /// Check if this is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, MindMapError::NotFound(_))
    }

    /// Get HTTP status code for this error
    pub fn http_status_code(&self) -> u16 {
        match self {
            MindMapError::NotFound(_) => 404,
            MindMapError::ProjectNotFound(_) | MindMapError::Validation { .. } => 400,
            MindMapError::Serialization(_) | MindMapError::Database(_) => 500,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            MindMapError::NotFound(_) => "NOT_FOUND",
            MindMapError::ProjectNotFound(_) => "PROJECT_NOT_FOUND",
            MindMapError::Validation { .. } => "VALIDATION_FAILED",
            MindMapError::Serialization(_) => "SERIALIZATION_ERROR",
            MindMapError::Database(_) => "DATABASE_ERROR",
        }
    }
}

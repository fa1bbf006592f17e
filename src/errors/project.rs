//! Project error types

use thiserror::Error;

use super::MAX_NAME_LENGTH;

/// Project-related errors
#[derive(Error, Debug)]
pub enum ProjectError {
    /// Project not found by ID
    #[error("Project not found")]
    NotFound(i64),

    /// Request data failed validation
    #[error("{field}: {message}")]
    Validation {
        /// Offending request field
        field: String,
        /// Human-readable reason
        message: String,
    },

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl ProjectError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProjectError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Validate a project name, returning it trimmed
    pub fn check_name(name: &str) -> Result<String, Self> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(Self::validation("name", "Project name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(Self::validation(
                "name",
                format!("Project name too long (max {} chars)", MAX_NAME_LENGTH),
            ));
        }

        Ok(trimmed.to_string())
    }

    /// Check if this is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProjectError::NotFound(_))
    }

    /// Get HTTP status code for this error
    pub fn http_status_code(&self) -> u16 {
        match self {
            ProjectError::NotFound(_) => 404,
            ProjectError::Validation { .. } => 400,
            ProjectError::Database(_) => 500,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ProjectError::NotFound(_) => "NOT_FOUND",
            ProjectError::Validation { .. } => "VALIDATION_FAILED",
            ProjectError::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ProjectError::NotFound(3);
        assert_eq!(err.to_string(), "Project not found");
        assert!(err.is_not_found());
        assert_eq!(err.http_status_code(), 404);
    }

    #[test]
    fn test_check_name_trims() {
        assert_eq!(ProjectError::check_name("  Trip Plan ").unwrap(), "Trip Plan");
    }

    #[test]
    fn test_check_name_rejects_blank() {
        let err = ProjectError::check_name("   ").unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
        assert_eq!(err.http_status_code(), 400);
    }

    #[test]
    fn test_check_name_counts_characters() {
        let exactly = "é".repeat(MAX_NAME_LENGTH);
        assert!(ProjectError::check_name(&exactly).is_ok());

        let over = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(ProjectError::check_name(&over).is_err());
    }

    #[test]
    fn test_database_error_is_internal() {
        let err = ProjectError::from(sea_orm::DbErr::Custom("boom".to_string()));
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }
}

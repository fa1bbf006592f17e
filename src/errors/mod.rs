//! Domain-specific error types
//!
//! Each resource has its own error enum so handlers can map failures onto
//! HTTP responses without inspecting database internals.
//!
//! # Error Categories
//!
//! - **ProjectError**: project listing, creation and deletion
//! - **MindMapError**: mindmap CRUD and graph payload (de)serialisation
//!
//! # Examples
//!
//! ```rust
//! use brainmap::errors::{MindMapError, ProjectError};
//!
//! let err = ProjectError::NotFound(42);
//! assert_eq!(err.http_status_code(), 404);
//!
//! let err = MindMapError::ProjectNotFound(7);
//! assert_eq!(err.error_code(), "PROJECT_NOT_FOUND");
//! ```

pub mod mindmap;
pub mod project;

pub use mindmap::MindMapError;
pub use project::ProjectError;

/// Result type alias for project operations
pub type ProjectResult<T> = Result<T, ProjectError>;

/// Result type alias for mindmap operations
pub type MindMapResult<T> = Result<T, MindMapError>;

/// Maximum length, in characters, of project and mindmap names
pub const MAX_NAME_LENGTH: usize = 100;

//! # Error Types
//!
//! Structured error types for pipe_core. Every failure is local and
//! recoverable by the caller; none of them leave a registry or pipe in a
//! half-updated state.
//!
//! ## Example
//!
//! ```rust
//! use pipe_core::errors::{PipeError, PipeResult};
//!
//! fn validate_length(length: f64) -> PipeResult<()> {
//!     if length <= 0.0 {
//!         return Err(PipeError::invalid_geometry(
//!             "length",
//!             length.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pipe_core operations
pub type PipeResult<T> = Result<T, PipeError>;

/// Structured error type for registry, pipe and persistence operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PipeError {
    /// Material name absent from the registry
    #[error("Material not found: {material_name}")]
    NotFound { material_name: String },

    /// A material-dependent value was requested before any material was selected
    #[error("No material selected: {accessor} requires a selected material")]
    Uninitialized { accessor: String },

    /// Degenerate geometry made a quotient undefined
    #[error("Division by zero while computing {quantity}")]
    DivideByZero { quantity: String },

    /// Non-physical pipe dimensions
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// A non-geometric input value is invalid (fluid density, gravity, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material record violates its invariants (non-finite values, density <= 0)
    #[error("Invalid material property '{field}': {value} - {reason}")]
    InvalidMaterial {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Snapshot schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Configuration file could not be parsed or holds invalid values
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },
}

impl PipeError {
    /// Create a NotFound error
    pub fn not_found(material_name: impl Into<String>) -> Self {
        PipeError::NotFound {
            material_name: material_name.into(),
        }
    }

    /// Create an Uninitialized error
    pub fn uninitialized(accessor: impl Into<String>) -> Self {
        PipeError::Uninitialized {
            accessor: accessor.into(),
        }
    }

    /// Create a DivideByZero error
    pub fn divide_by_zero(quantity: impl Into<String>) -> Self {
        PipeError::DivideByZero {
            quantity: quantity.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PipeError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PipeError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidMaterial error
    pub fn invalid_material(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PipeError::InvalidMaterial {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        PipeError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config(reason: impl Into<String>) -> Self {
        PipeError::ConfigError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PipeError::NotFound { .. } => "NOT_FOUND",
            PipeError::Uninitialized { .. } => "UNINITIALIZED",
            PipeError::DivideByZero { .. } => "DIVIDE_BY_ZERO",
            PipeError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            PipeError::InvalidInput { .. } => "INVALID_INPUT",
            PipeError::InvalidMaterial { .. } => "INVALID_MATERIAL",
            PipeError::FileError { .. } => "FILE_ERROR",
            PipeError::SerializationError { .. } => "SERIALIZATION_ERROR",
            PipeError::VersionMismatch { .. } => "VERSION_MISMATCH",
            PipeError::ConfigError { .. } => "CONFIG_ERROR",
        }
    }
}

impl From<serde_json::Error> for PipeError {
    fn from(e: serde_json::Error) -> Self {
        PipeError::SerializationError {
            reason: e.to_string(),
        }
    }
}

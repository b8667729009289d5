//! Error types for Propsy operations.
//!
//! This module defines [`PropsyError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure is fatal: errors propagate to `main` and end the run
//! - Use `PropsyError` for domain-specific errors that need distinct messages
//! - Use `anyhow::Error` (via `PropsyError::Other`) for unexpected errors
//! - [`PropsyError::kind`] groups variants into the coarse [`ErrorKind`]s

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Propsy operations.
#[derive(Debug, Error)]
pub enum PropsyError {
    /// The glob pattern matched no files.
    #[error("No properties files found with pattern {pattern}")]
    NoFilesFound { pattern: String },

    /// The glob pattern could not be compiled.
    #[error("Invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Discovery produced an empty path.
    #[error("Resolved file path is empty")]
    EmptyPath,

    /// The selected file is not present on disk.
    #[error("File {} does not exist", .path.display())]
    FileMissing { path: PathBuf },

    /// The selected file does not carry a `.properties` or `.props` extension.
    #[error("File {} is not a valid .properties or .props file", .path.display())]
    InvalidExtension { path: PathBuf },

    /// Single mode was requested without naming a property.
    #[error("Property is not defined and 'all' is not true")]
    PropertyUndefined,

    /// The property is absent (or empty) and no default was supplied.
    #[error("Property {property} not found in {}", .path.display())]
    PropertyNotFound { property: String, path: PathBuf },

    /// An output could not be written to the pipeline output channel.
    #[error("Failed to set output '{name}': {message}")]
    OutputRejected { name: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Coarse classification of a [`PropsyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Something that was looked for (file or property) does not exist.
    NotFound,
    /// The inputs or the selected file are unusable.
    InvalidInput,
    /// Reading or writing the filesystem failed.
    Io,
}

impl PropsyError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoFilesFound { .. } | Self::PropertyNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidPattern { .. }
            | Self::EmptyPath
            | Self::FileMissing { .. }
            | Self::InvalidExtension { .. }
            | Self::PropertyUndefined
            | Self::OutputRejected { .. } => ErrorKind::InvalidInput,
            Self::Io(_) | Self::Other(_) => ErrorKind::Io,
        }
    }
}

/// Result type alias for Propsy operations.
pub type Result<T> = std::result::Result<T, PropsyError>;

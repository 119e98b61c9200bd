//! Application error types using thiserror
//!
//! Error hierarchy:
//! - PropsError: Issues with reading, parsing, or writing the versions.props file
//! - ReportError: Issues with loading update recommendation reports
//! - ConfigError: Issues with CLI configuration
//!
//! Unresolved identifiers and conflicting recommendations are not errors;
//! they surface as [`crate::domain::Warning`] values.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// versions.props related errors
    #[error(transparent)]
    Props(#[from] PropsError),

    /// Recommendation report related errors
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to the versions.props document
#[derive(Error, Debug)]
pub enum PropsError {
    /// A line is neither blank, a comment, nor a version line
    #[error("invalid version line {line_number}: '{line}'")]
    MalformedLine { line_number: usize, line: String },

    /// Failed to read the properties file
    #[error("failed to read versions file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the properties file
    #[error("failed to write versions file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to recommendation reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to read a report file
    #[error("failed to read report {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report file is not valid YAML for an update report
    #[error("failed to parse YAML in {path}: {message}")]
    YamlParseError { path: PathBuf, message: String },

    /// Failed to write the markdown change log
    #[error("failed to write change log {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid path
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

impl PropsError {
    /// Creates a new MalformedLine error
    pub fn malformed_line(line_number: usize, line: impl Into<String>) -> Self {
        PropsError::MalformedLine {
            line_number,
            line: line.into(),
        }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PropsError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PropsError::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl ReportError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new YamlParseError
    pub fn yaml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ReportError::YamlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl ConfigError {
    /// Creates a new InvalidPath error
    pub fn invalid_path(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new ConflictingOptions error
    pub fn conflicting_options(message: impl Into<String>) -> Self {
        ConfigError::ConflictingOptions {
            message: message.into(),
        }
    }
}

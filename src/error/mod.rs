//! Error types and handling for distpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Project descriptor errors
//! - [`deps`]: Dependency resolution and primary artifact errors
//! - [`fs`]: File system errors, one constructor per packaging stage

pub mod config;
pub mod deps;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for packaging operations
///
/// Every variant names the stage that failed so a single fatal message is
/// enough to tell resolution, erase, copy and install failures apart.
#[derive(Error, Diagnostic, Debug)]
pub enum PackError {
    // Configuration errors
    #[error("Project descriptor not found: {path}")]
    #[diagnostic(
        code(distpack::config::not_found),
        help("Create a distpack.yaml in the project root or pass --project")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse project descriptor: {path}: {reason}")]
    #[diagnostic(code(distpack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid project descriptor: {message}")]
    #[diagnostic(code(distpack::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Invalid dependency coordinate '{input}': {reason}")]
    #[diagnostic(
        code(distpack::config::invalid_coordinate),
        help("Coordinates look like group/artifact:version, optionally followed by @extension")
    )]
    InvalidCoordinate { input: String, reason: String },

    // Resolution errors
    #[error("Dependency not found: {coordinate} (expected {path})")]
    #[diagnostic(
        code(distpack::resolve::not_found),
        help("Make sure the artifact is present in the local repository (see --repository)")
    )]
    DependencyNotFound { coordinate: String, path: String },

    // Primary artifact errors
    #[error("Primary artifact not found: {path}")]
    #[diagnostic(
        code(distpack::build::artifact_not_found),
        help("Build the application jar first, or set 'artifact' / 'build-command' in distpack.yaml")
    )]
    ArtifactNotFound { path: String },

    #[error("Build command failed: {command}: {reason}")]
    #[diagnostic(code(distpack::build::failed))]
    BuildFailed { command: String, reason: String },

    // File system errors
    #[error("Failed to erase {path}: {reason}")]
    #[diagnostic(code(distpack::erase::failed))]
    EraseFailed { path: String, reason: String },

    #[error("Failed to copy {path}: {reason}")]
    #[diagnostic(code(distpack::copy::failed))]
    CopyFailed { path: String, reason: String },

    #[error("Failed to install {path}: {reason}")]
    #[diagnostic(code(distpack::install::failed))]
    InstallFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(distpack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PackError {
    fn from(err: std::io::Error) -> Self {
        PackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PackError {
    fn from(err: serde_yaml::Error) -> Self {
        PackError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PackError>;

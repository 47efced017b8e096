//! Dependency resolution and primary artifact errors

use super::PackError;

/// Creates a dependency not found error
pub fn not_found(coordinate: impl Into<String>, path: impl Into<String>) -> PackError {
    PackError::DependencyNotFound {
        coordinate: coordinate.into(),
        path: path.into(),
    }
}

/// Creates a primary artifact not found error
pub fn artifact_not_found(path: impl Into<String>) -> PackError {
    PackError::ArtifactNotFound { path: path.into() }
}

/// Creates a build command failure
pub fn build_failed(command: impl Into<String>, reason: impl Into<String>) -> PackError {
    PackError::BuildFailed {
        command: command.into(),
        reason: reason.into(),
    }
}

//! File system errors
//!
//! Each constructor takes the failing path so the fatal message can point at it.

use std::path::Path;

use super::PackError;

/// Creates an erase failure
pub fn erase_failed(path: impl Into<String>, reason: impl Into<String>) -> PackError {
    PackError::EraseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a copy failure
pub fn copy_failed(path: impl Into<String>, reason: impl Into<String>) -> PackError {
    PackError::CopyFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a launcher install failure
pub fn install_failed(path: impl Into<String>, reason: impl Into<String>) -> PackError {
    PackError::InstallFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> PackError {
    PackError::IoError {
        message: message.into(),
    }
}

/// Maps an `io::Error` on `path` into an erase failure
pub(crate) fn erase_error(path: &Path, e: impl ToString) -> PackError {
    erase_failed(path.display().to_string(), e.to_string())
}

/// Maps an `io::Error` on `path` into a copy failure
pub(crate) fn copy_error(path: &Path, e: impl ToString) -> PackError {
    copy_failed(path.display().to_string(), e.to_string())
}

/// Maps an `io::Error` on `path` into an install failure
pub(crate) fn install_error(path: &Path, e: impl ToString) -> PackError {
    install_failed(path.display().to_string(), e.to_string())
}

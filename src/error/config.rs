//! Project descriptor errors

use super::PackError;

/// Creates a descriptor not found error
pub fn not_found(path: impl Into<String>) -> PackError {
    PackError::ConfigNotFound { path: path.into() }
}

/// Creates a descriptor parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PackError {
    PackError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid descriptor error
pub fn invalid(message: impl Into<String>) -> PackError {
    PackError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates an invalid coordinate error
pub fn invalid_coordinate(input: impl Into<String>, reason: impl Into<String>) -> PackError {
    PackError::InvalidCoordinate {
        input: input.into(),
        reason: reason.into(),
    }
}

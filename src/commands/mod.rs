//! Command implementations for the distpack CLI

pub mod completions;
pub mod deps;
pub mod helpers;
pub mod standalone;
pub mod version;

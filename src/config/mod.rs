//! Configuration file handling for distpack
//!
//! This module contains data structures for:
//! - `distpack.yaml` - Project descriptor
//! - Dependency coordinates
//! - Build profiles and their directives

pub mod coordinate;
pub mod profile;
pub mod project;

// Re-export commonly used types
pub use coordinate::{Coordinate, normalize_key};
pub use profile::{Directive, Profile, SettingValue};
pub use project::{DESCRIPTOR_FILE, ProjectDescriptor};

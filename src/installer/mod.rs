//! Launcher installation for standalone bundles
//!
//! This module handles:
//! - Looking up launcher resources by name ([`resources`])
//! - Substituting template variables into them ([`template`])
//! - Writing them, executable, into a bundle's `bin` directory ([`launcher`])

pub mod launcher;
pub mod resources;
pub mod template;

pub use launcher::install_launchers;
pub use resources::{EmbeddedResources, Layered, ResourceProvider, SearchPath};
pub use template::TemplateContext;

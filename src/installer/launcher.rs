//! Launcher installation
//!
//! Writes the fixed set of launcher scripts and runtime config into a
//! bundle's `bin` directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::resources::ResourceProvider;
use super::template::{TemplateContext, render};
use crate::common::fs::make_executable;
use crate::error::Result;
use crate::error::fs::install_error;

/// Directory under the bundle root receiving launchers
pub const BIN_DIR: &str = "bin";

/// How a resource's contents reach the bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Copied byte for byte
    Verbatim,
    /// Rendered through the templater first
    Templated,
}

/// A named launcher resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LauncherResource {
    pub name: &'static str,
    pub kind: ResourceKind,
}

/// Resources installed into every standalone bundle
pub const LAUNCHERS: &[LauncherResource] = &[
    LauncherResource {
        name: "logback.xml",
        kind: ResourceKind::Verbatim,
    },
    LauncherResource {
        name: "start.sh",
        kind: ResourceKind::Templated,
    },
    LauncherResource {
        name: "stop.sh",
        kind: ResourceKind::Templated,
    },
    LauncherResource {
        name: "h2.sh",
        kind: ResourceKind::Templated,
    },
];

/// Install [`LAUNCHERS`] into `<target_root>/bin`
///
/// Resources the provider does not have are skipped. Every installed file is
/// made executable. Returns the installed paths.
pub fn install_launchers(
    target_root: &Path,
    provider: &dyn ResourceProvider,
    context: &TemplateContext,
) -> Result<Vec<PathBuf>> {
    install_resources(target_root, LAUNCHERS, provider, context)
}

/// Install a resource table into `<target_root>/bin`
fn install_resources(
    target_root: &Path,
    resources: &[LauncherResource],
    provider: &dyn ResourceProvider,
    context: &TemplateContext,
) -> Result<Vec<PathBuf>> {
    let bin = target_root.join(BIN_DIR);
    fs::create_dir_all(&bin).map_err(|e| install_error(&bin, e))?;

    let mut installed = Vec::new();
    for resource in resources {
        let Some(bytes) = provider.lookup(resource.name) else {
            log::debug!("Launcher resource '{}' not found, skipping", resource.name);
            continue;
        };

        let target = bin.join(resource.name);
        match resource.kind {
            ResourceKind::Verbatim => {
                fs::write(&target, &bytes).map_err(|e| install_error(&target, e))?;
            }
            ResourceKind::Templated => {
                let text = std::str::from_utf8(&bytes).map_err(|e| install_error(&target, e))?;
                fs::write(&target, render(text, context))
                    .map_err(|e| install_error(&target, e))?;
            }
        }
        make_executable(&target)?;

        log::debug!("Installed {}", target.display());
        installed.push(target);
    }

    Ok(installed)
}

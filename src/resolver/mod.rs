//! Dependency resolution for packaging
//!
//! This module handles:
//! - Profile algebra: which profiles are merged for packaging ([`profiles`])
//! - Graph resolution against a local repository ([`repository`])
//! - Filtering resolved files down to runtime artifacts

pub mod profiles;
pub mod repository;

use std::path::{Path, PathBuf};

pub use profiles::effective_descriptor;
pub use repository::{DependencyResolver, LocalRepository};

use crate::config::ProjectDescriptor;
use crate::error::Result;

/// Runtime artifact files selected for a bundle
///
/// File names are unique and every file carries the packaging extension.
#[derive(Debug, Clone, Default)]
pub struct ResolvedDependencySet {
    files: Vec<PathBuf>,
}

impl ResolvedDependencySet {
    /// Keep only `extension` files, one per file name
    ///
    /// A later file with an already seen name replaces the earlier path in
    /// place (last write wins by iteration order).
    pub fn from_files(files: impl IntoIterator<Item = PathBuf>, extension: &str) -> Self {
        let mut selected: Vec<PathBuf> = Vec::new();

        for file in files {
            if !has_extension(&file, extension) {
                log::debug!("Ignoring non-{} file {}", extension, file.display());
                continue;
            }

            let name = file.file_name().map(std::ffi::OsStr::to_os_string);
            match selected
                .iter_mut()
                .find(|existing| existing.file_name().map(std::ffi::OsStr::to_os_string) == name)
            {
                Some(existing) => {
                    log::warn!(
                        "Duplicate artifact name: {} replaces {}",
                        file.display(),
                        existing.display()
                    );
                    *existing = file;
                }
                None => selected.push(file),
            }
        }

        Self { files: selected }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Resolve an effective descriptor's runtime artifacts
pub fn resolve(
    effective: &ProjectDescriptor,
    resolver: &dyn DependencyResolver,
) -> Result<ResolvedDependencySet> {
    let files = resolver.resolve(
        &effective.dependencies,
        &effective.managed_dependencies,
        &effective.exclusions,
    )?;

    let resolved = ResolvedDependencySet::from_files(files, &effective.packaging_extension());
    if resolved.is_empty() {
        log::info!("No runtime dependencies to package");
    } else {
        log::info!("Resolved {} runtime dependencies", resolved.len());
    }
    Ok(resolved)
}

//! Library collection
//!
//! Fills a flat directory with the primary artifact and every resolved
//! runtime dependency.

use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::ArtifactBuilder;
use crate::config::ProjectDescriptor;
use crate::error::Result;
use crate::error::fs::copy_error;
use crate::resolver::{self, DependencyResolver, ResolvedDependencySet};

/// Everything destined for a library directory, known before it is touched
#[derive(Debug, Clone)]
pub struct Libraries {
    pub artifact: PathBuf,
    pub dependencies: ResolvedDependencySet,
}

impl Libraries {
    /// Resolve dependencies, then build the primary artifact
    ///
    /// Nothing on disk is modified except by the build command, so callers
    /// run this before erasing any target.
    pub fn prepare(
        effective: &ProjectDescriptor,
        builder: &dyn ArtifactBuilder,
        dependency_resolver: &dyn DependencyResolver,
    ) -> Result<Self> {
        let dependencies = resolver::resolve(effective, dependency_resolver)?;
        let artifact = builder.build(effective)?;
        Ok(Self {
            artifact,
            dependencies,
        })
    }

    /// Primary artifact first, then dependencies in resolution order
    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.artifact).chain(self.dependencies.files())
    }
}

/// Copy prepared libraries into `target` by file name
///
/// A later file with the same name overwrites an earlier one. Returns the
/// copied destinations in copy order.
pub fn collect_libraries(libraries: &Libraries, target: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(target).map_err(|e| copy_error(target, e))?;

    let mut copied = Vec::with_capacity(libraries.dependencies.len() + 1);
    for source in libraries.files() {
        let Some(name) = source.file_name() else {
            log::warn!("Skipping {}: no file name", source.display());
            continue;
        };
        let destination = target.join(name);
        fs::copy(source, &destination).map_err(|e| copy_error(source, e))?;
        log::debug!("Copied {} to {}", source.display(), destination.display());
        copied.push(destination);
    }

    log::info!(
        "Collected {} libraries into {}",
        copied.len(),
        target.display()
    );
    Ok(copied)
}

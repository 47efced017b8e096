//! Bundle assembly
//!
//! Two packaging modes, both single pass and idempotent:
//! - [`package_dependencies`]: a flat directory of runtime jars
//! - [`package_standalone`]: a full distribution tree
//!
//! ```text
//! pkg/
//! ├── bin/      launchers and logback.xml, executable
//! ├── lib/      primary artifact + runtime dependencies
//! ├── conf/ etc/ src/ doc/ public/   mirrored from the project root
//! └── logs/     kept across runs; readme.txt rewritten
//! ```
//!
//! A failure part way leaves a partial tree; the next successful run
//! repairs it.

pub mod library;

use std::fs;
use std::path::{Path, PathBuf};

pub use library::{Libraries, collect_libraries};

use crate::builder::ArtifactBuilder;
use crate::common::fs::{EraseOptions, canonical_path, copy_tree, erase_tree, recreate_dir};
use crate::config::ProjectDescriptor;
use crate::error::fs::{erase_error, install_error, io_error};
use crate::error::{Result, config};
use crate::installer::{ResourceProvider, TemplateContext, install_launchers};
use crate::progress::StageProgress;
use crate::resolver::{DependencyResolver, effective_descriptor};

/// Default dependency target under the project root
pub const LIB_DIR: &str = "lib";

/// Default standalone target under the project root
pub const PKG_DIR: &str = "pkg";

/// Directory preserved across standalone runs
pub const LOGS_DIR: &str = "logs";

/// Project subdirectories mirrored into a standalone bundle, in copy order
pub const AUXILIARY_DIRS: &[&str] = &["conf", "etc", "src", "doc", "public"];

/// Placeholder written to `logs/readme.txt`
pub const LOGS_README: &str = "Application logs are written to this directory.\n";

/// Stage names of a standalone run, in order
pub const STANDALONE_STAGES: &[&str] = &[
    "resolve",
    "erase",
    "copy",
    "launchers",
    "libraries",
    "logs",
];

/// A project descriptor together with the collaborators that package it
pub struct Packager {
    pub project: ProjectDescriptor,
    pub resolver: Box<dyn DependencyResolver>,
    pub builder: Box<dyn ArtifactBuilder>,
    pub resources: Box<dyn ResourceProvider>,
}

impl Packager {
    pub fn new(
        project: ProjectDescriptor,
        resolver: impl DependencyResolver + 'static,
        builder: impl ArtifactBuilder + 'static,
        resources: impl ResourceProvider + 'static,
    ) -> Self {
        Self {
            project,
            resolver: Box::new(resolver),
            builder: Box::new(builder),
            resources: Box::new(resources),
        }
    }

    /// Resolve and build everything bound for `lib`, before any target is erased
    fn prepare_libraries(&self, effective: &ProjectDescriptor) -> Result<Libraries> {
        Libraries::prepare(effective, self.builder.as_ref(), self.resolver.as_ref())
    }
}

/// Refuse targets whose erasure would destroy project sources
///
/// A target may not be the project root or one of its ancestors, nor lie
/// inside a mirrored auxiliary directory.
pub fn check_target(root: &Path, target: &Path) -> Result<()> {
    let canonical = |path: &Path| {
        canonical_path(path)
            .map_err(|e| io_error(format!("Cannot resolve {}: {}", path.display(), e)))
    };
    let root = canonical(root)?;
    let target_path = canonical(target)?;

    if root.starts_with(&target_path) {
        return Err(config::invalid(format!(
            "target {} would erase the project root {}",
            target.display(),
            root.display()
        )));
    }
    if let Some(dir) = AUXILIARY_DIRS
        .iter()
        .find(|dir| target_path.starts_with(root.join(dir)))
    {
        return Err(config::invalid(format!(
            "target {} lies inside the project's '{}' directory",
            target.display(),
            dir
        )));
    }
    Ok(())
}

/// What a packaging run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageReport {
    /// Bundle root
    pub target: PathBuf,
    /// Files mirrored from auxiliary directories
    pub copied_files: usize,
    /// Launcher resources installed into `bin`
    pub launchers: usize,
    /// Files placed in `lib`, primary artifact included
    pub libraries: usize,
}

/// Package runtime dependencies into a flat directory
///
/// `target` defaults to `<root>/lib`. Resolution and the artifact build
/// run first; only then are the previous contents erased.
pub fn package_dependencies(packager: &Packager, target: Option<PathBuf>) -> Result<PackageReport> {
    let project = &packager.project;
    let target = target.unwrap_or_else(|| project.root.join(LIB_DIR));
    check_target(&project.root, &target)?;
    let effective = effective_descriptor(project);
    log::info!("Packaging dependencies of {} into {}", project.name, target.display());

    let prepared = packager.prepare_libraries(&effective)?;
    recreate_dir(&target, &EraseOptions::default())?;
    let libraries = collect_libraries(&prepared, &target)?;

    Ok(PackageReport {
        target,
        libraries: libraries.len(),
        ..PackageReport::default()
    })
}

/// Package a full standalone distribution
///
/// `destination` defaults to `<root>/pkg`. Once resolution and the artifact
/// build succeed, everything under it except `logs` is erased, then rebuilt.
pub fn package_standalone(
    packager: &Packager,
    destination: Option<PathBuf>,
    progress: &StageProgress,
) -> Result<PackageReport> {
    let project = &packager.project;
    let target = destination.unwrap_or_else(|| project.root.join(PKG_DIR));
    check_target(&project.root, &target)?;
    let effective = effective_descriptor(project);
    log::info!("Packaging {} {} into {}", project.name, project.version, target.display());

    progress.start("resolve");
    let prepared = packager.prepare_libraries(&effective)?;
    progress.advance();

    progress.start("erase");
    fs::create_dir_all(&target).map_err(|e| erase_error(&target, e))?;
    erase_tree(&target, &EraseOptions::keep(&[LOGS_DIR]))?;
    progress.advance();

    progress.start("copy");
    let mut copied_files = 0;
    for dir in AUXILIARY_DIRS {
        copied_files += copy_tree(&project.root.join(dir), &target.join(dir))?;
    }
    progress.advance();

    progress.start("launchers");
    let context = TemplateContext::from_project(&effective);
    let launchers = install_launchers(&target, packager.resources.as_ref(), &context)?;
    progress.advance();

    progress.start("libraries");
    let libraries = collect_libraries(&prepared, &target.join(LIB_DIR))?;
    progress.advance();

    progress.start("logs");
    let logs = target.join(LOGS_DIR);
    fs::create_dir_all(&logs).map_err(|e| install_error(&logs, e))?;
    let readme = logs.join("readme.txt");
    fs::write(&readme, LOGS_README).map_err(|e| install_error(&readme, e))?;
    progress.advance();

    Ok(PackageReport {
        target,
        copied_files,
        launchers: launchers.len(),
        libraries: libraries.len(),
    })
}

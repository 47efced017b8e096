//! Command helper utilities

use std::path::{Path, PathBuf};

use console::Style;

use crate::builder::PrebuiltArtifact;
use crate::bundle::{PackageReport, Packager};
use crate::config::ProjectDescriptor;
use crate::error::{Result, fs::io_error};
use crate::installer::{EmbeddedResources, Layered, SearchPath};
use crate::resolver::LocalRepository;

/// Resolve the project root from an optional argument
///
/// Falls back to the current directory. The result is canonical, without
/// Windows verbatim prefixes.
pub fn resolve_project_root(project: Option<PathBuf>) -> Result<PathBuf> {
    let root = match project {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {}", e)))?,
    };
    dunce::canonicalize(&root)
        .map_err(|e| io_error(format!("Cannot access project root {}: {}", root.display(), e)))
}

/// Local repository from an optional argument, else `~/.m2/repository`
pub fn resolve_repository(repository: Option<PathBuf>) -> Result<LocalRepository> {
    repository
        .or_else(LocalRepository::default_location)
        .map(LocalRepository::new)
        .ok_or_else(|| io_error("Cannot determine home directory; pass --repository"))
}

/// Launcher resources: the descriptor's `launcher-path` first, then the built-ins
pub fn resource_provider(project: &ProjectDescriptor) -> Layered {
    let search_dirs = project
        .launcher_path
        .iter()
        .map(|dir| project.root.join(dir));
    Layered::new()
        .with(SearchPath::new(search_dirs))
        .with(EmbeddedResources)
}

/// Load the descriptor and wire up the default collaborators
pub fn build_packager(project: Option<PathBuf>, repository: Option<PathBuf>) -> Result<Packager> {
    let root = resolve_project_root(project)?;
    let descriptor = ProjectDescriptor::load(&root)?;
    let repository = resolve_repository(repository)?;
    log::debug!("Using repository {}", repository.root().display());

    let resources = resource_provider(&descriptor);
    Ok(Packager::new(
        descriptor,
        repository,
        PrebuiltArtifact,
        resources,
    ))
}

/// Print the closing summary of a packaging run
pub fn print_report(project: &ProjectDescriptor, report: &PackageReport) {
    let green = Style::new().green().bold();
    let dim = Style::new().dim();

    println!(
        "{} {} {}",
        green.apply_to("Packaged"),
        project.name,
        project.version
    );
    println!("  {} {}", dim.apply_to("target:"), display_path(&report.target));
    println!("  {} {}", dim.apply_to("libraries:"), report.libraries);
    if report.launchers > 0 {
        println!("  {} {}", dim.apply_to("launchers:"), report.launchers);
    }
    if report.copied_files > 0 {
        println!("  {} {}", dim.apply_to("copied files:"), report.copied_files);
    }
}

fn display_path(path: &Path) -> String {
    dunce::simplified(path).display().to_string()
}

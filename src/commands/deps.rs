//! Deps command: package runtime dependencies into a flat directory

use std::path::PathBuf;

use super::helpers::{build_packager, print_report};
use crate::bundle::package_dependencies;
use crate::cli::DepsArgs;
use crate::error::Result;

/// Run deps command
pub fn run(project: Option<PathBuf>, repository: Option<PathBuf>, args: DepsArgs) -> Result<()> {
    let packager = build_packager(project, repository)?;
    let report = package_dependencies(&packager, args.target)?;
    print_report(&packager.project, &report);
    Ok(())
}

//! Standalone command: build a full distribution tree

use std::path::PathBuf;

use super::helpers::{build_packager, print_report};
use crate::bundle::{STANDALONE_STAGES, package_standalone};
use crate::cli::StandaloneArgs;
use crate::error::Result;
use crate::progress::StageProgress;

/// Run standalone command
pub fn run(
    project: Option<PathBuf>,
    repository: Option<PathBuf>,
    args: StandaloneArgs,
) -> Result<()> {
    let packager = build_packager(project, repository)?;

    let progress = StageProgress::new(STANDALONE_STAGES.len() as u64);
    let result = package_standalone(&packager, args.dest, &progress);
    match &result {
        Ok(_) => progress.finish(),
        Err(_) => progress.abandon(),
    }

    let report = result?;
    print_report(&packager.project, &report);
    Ok(())
}

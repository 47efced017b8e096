//! Primary artifact builder
//!
//! Compiling the application jar is not distpack's job. The builder only
//! locates the artifact, optionally running the project's own build command
//! first.

use std::path::PathBuf;
use std::process::Command;

use crate::config::ProjectDescriptor;
use crate::error::{Result, deps};

/// Produces the primary artifact for an effective descriptor
pub trait ArtifactBuilder {
    fn build(&self, effective: &ProjectDescriptor) -> Result<PathBuf>;
}

/// Builder for artifacts produced outside distpack
///
/// Runs `build-command` when the descriptor has one, then expects the
/// artifact at its configured (or default) location.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrebuiltArtifact;

impl PrebuiltArtifact {
    fn run_build_command(effective: &ProjectDescriptor, command: &[String]) -> Result<()> {
        let Some((program, args)) = command.split_first() else {
            return Ok(());
        };
        let display = command.join(" ");
        log::info!("Running build command: {}", display);

        let status = Command::new(program)
            .args(args)
            .current_dir(&effective.root)
            .status()
            .map_err(|e| deps::build_failed(&display, e.to_string()))?;

        if !status.success() {
            return Err(deps::build_failed(
                &display,
                match status.code() {
                    Some(code) => format!("exited with status {}", code),
                    None => "terminated by signal".to_string(),
                },
            ));
        }
        Ok(())
    }
}

impl ArtifactBuilder for PrebuiltArtifact {
    fn build(&self, effective: &ProjectDescriptor) -> Result<PathBuf> {
        if let Some(command) = &effective.build_command {
            Self::run_build_command(effective, command)?;
        }

        let artifact = effective.primary_artifact_path();
        if !artifact.is_file() {
            return Err(deps::artifact_not_found(artifact.display().to_string()));
        }
        log::debug!("Primary artifact: {}", artifact.display());
        Ok(artifact)
    }
}

//! Common test utilities for distpack integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A project root and a local repository in one temp directory
pub struct TestProject {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Project root, holds distpack.yaml
    pub path: PathBuf,
    /// Local artifact repository passed with --repository
    pub repository: PathBuf,
}

impl TestProject {
    /// Create an empty project root and repository
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let repository = temp.path().join("repository");
        std::fs::create_dir_all(&path).expect("Failed to create project root");
        std::fs::create_dir_all(&repository).expect("Failed to create repository");
        Self {
            temp,
            path,
            repository,
        }
    }

    /// Create a project from a descriptor, with its default primary artifact built
    ///
    /// The descriptor must not set `artifact`; the artifact is written to
    /// `target/<name>-<version>.jar`.
    pub fn new(name: &str, version: &str, extra: &str) -> Self {
        let project = Self::empty();
        project.write_file(
            "distpack.yaml",
            &format!("name: {}\nversion: '{}'\n{}", name, version, extra),
        );
        project.write_file(
            &format!("target/{}-{}.jar", name, version),
            "primary artifact",
        );
        project
    }

    /// Write a file in the project root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project root
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project root
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Sorted entry names of a directory under the project root
    #[allow(dead_code)]
    pub fn list_dir(&self, path: &str) -> Vec<String> {
        list_dir(&self.path.join(path))
    }

    /// Put `group/artifact:version` into the repository with its dependencies
    pub fn install(&self, coordinate: &str, dependencies: &[&str]) {
        let (key, version) = coordinate
            .split_once(':')
            .expect("Coordinate needs a version");
        let (group, artifact) = key.split_once('/').expect("Coordinate needs a group");

        let mut dir = self.repository.clone();
        for part in group.split('.') {
            dir.push(part);
        }
        dir.push(artifact);
        dir.push(version);
        std::fs::create_dir_all(&dir).expect("Failed to create repository dir");

        std::fs::write(dir.join(format!("{}-{}.jar", artifact, version)), coordinate)
            .expect("Failed to write artifact");
        if !dependencies.is_empty() {
            std::fs::write(
                dir.join(format!("{}-{}.deps.yaml", artifact, version)),
                format!("dependencies: [{}]\n", dependencies.join(", ")),
            )
            .expect("Failed to write dependency manifest");
        }
    }

    /// The distpack binary pointed at this project and repository
    pub fn distpack(&self) -> Command {
        let mut cmd = distpack_cmd();
        cmd.arg("--project")
            .arg(&self.path)
            .arg("--repository")
            .arg(&self.repository);
        cmd
    }
}

/// The distpack binary with a clean environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn distpack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("distpack").expect("Failed to find distpack binary");
    cmd.env_remove("DISTPACK_PROJECT")
        .env_remove("DISTPACK_REPOSITORY")
        .env_remove("RUST_LOG");
    cmd
}

/// Sorted entry names of a directory
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read entry")
                .file_name()
                .to_string_lossy()
                .to_string()
        })
        .collect();
    names.sort();
    names
}

//! Test fixtures shared by unit tests
//!
//! A [`FixtureProject`] is a temp directory holding a project root with a
//! `distpack.yaml` and its built primary artifact, next to an empty local
//! repository that tests populate with [`FixtureProject::install`].
//!
//! ```ignore
//! let fixture = FixtureProject::new("name: app\nversion: '1.0'\ndependencies: [org/a:1.0]\n");
//! fixture.install("org/a:1.0", &["org/b:2.0"]);
//! fixture.install("org/b:2.0", &[]);
//! ```

#![allow(clippy::expect_used)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;

use crate::config::{Coordinate, DESCRIPTOR_FILE, ProjectDescriptor};

/// A project root plus a local repository in one temp directory
pub struct FixtureProject {
    temp: TempDir,
}

impl FixtureProject {
    /// Write `descriptor` and create the primary artifact it points at
    pub fn new(descriptor: &str) -> Self {
        let temp = TempDir::new_in(crate::temp::temp_dir_base())
            .expect("Failed to create temp directory");
        let fixture = Self { temp };
        std::fs::create_dir_all(fixture.root()).expect("Failed to create project root");
        std::fs::create_dir_all(fixture.repository()).expect("Failed to create repository");
        fixture.write(DESCRIPTOR_FILE, descriptor);

        let artifact = fixture.project().primary_artifact_path();
        let relative = artifact
            .strip_prefix(fixture.root())
            .expect("Primary artifact outside project root")
            .to_string_lossy()
            .to_string();
        fixture.write(&relative, "primary artifact");
        fixture
    }

    pub fn root(&self) -> PathBuf {
        self.temp.path().join("project")
    }

    pub fn repository(&self) -> PathBuf {
        self.temp.path().join("repository")
    }

    /// The descriptor as loaded from disk
    pub fn project(&self) -> ProjectDescriptor {
        ProjectDescriptor::load(&self.root()).expect("Failed to load fixture descriptor")
    }

    /// Write a file relative to the project root
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(path, content).expect("Failed to write fixture file");
    }

    /// Put `coordinate` into the repository with the given dependencies
    pub fn install(&self, coordinate: &str, dependencies: &[&str]) {
        let parsed: Coordinate = coordinate.parse().expect("Invalid fixture coordinate");
        let dir = parsed.repository_dir(&self.repository());
        std::fs::create_dir_all(&dir).expect("Failed to create repository dir");
        std::fs::write(dir.join(parsed.file_name()), coordinate)
            .expect("Failed to write fixture artifact");
        if !dependencies.is_empty() {
            std::fs::write(
                dir.join(format!("{}-{}.deps.yaml", parsed.artifact, parsed.version)),
                format!("dependencies: [{}]\n", dependencies.join(", ")),
            )
            .expect("Failed to write fixture manifest");
        }
    }

    /// Sorted names of the entries directly inside `dir`
    pub fn file_names(&self, dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .expect("Failed to read fixture dir")
            .map(|entry| {
                entry
                    .expect("Failed to read fixture entry")
                    .file_name()
                    .to_string_lossy()
                    .to_string()
            })
            .collect();
        names.sort();
        names
    }
}

/// Every file under `root` by relative path, with its contents
pub fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.expect("Failed to walk snapshot"))
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .expect("Entry outside snapshot root")
                .to_string_lossy()
                .replace('\\', "/");
            let bytes = std::fs::read(entry.path()).expect("Failed to read snapshot file");
            (relative, bytes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_layout() {
        let fixture = FixtureProject::new("name: app\nversion: '1.0'\n");
        assert!(fixture.root().join(DESCRIPTOR_FILE).is_file());
        assert!(fixture.root().join("target/app-1.0.jar").is_file());
        assert!(fixture.repository().is_dir());
    }

    #[test]
    fn test_install_writes_manifest() {
        let fixture = FixtureProject::new("name: app\nversion: '1.0'\n");
        fixture.install("org.example/web:2.0", &["org/x:1.0"]);

        let dir = fixture.repository().join("org/example/web/2.0");
        assert!(dir.join("web-2.0.jar").is_file());
        assert!(dir.join("web-2.0.deps.yaml").is_file());
    }

    #[test]
    fn test_snapshot_relative_paths() {
        let fixture = FixtureProject::new("name: app\nversion: '1.0'\n");
        fixture.write("conf/a/b.txt", "b");

        let files = snapshot(&fixture.root().join("conf"));
        assert_eq!(files.get("a/b.txt").map(Vec::as_slice), Some(b"b".as_slice()));
    }
}

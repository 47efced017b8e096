//! Local artifact repository
//!
//! Resolves coordinates against a maven-layout directory of already
//! downloaded artifacts. Fetching from remote repositories is someone
//! else's job; a coordinate missing here is a fatal resolution error.
//!
//! A coordinate's own dependencies are listed in an optional sidecar next
//! to the artifact:
//!
//! ```text
//! <repo>/org/example/web/2.0/web-2.0.jar
//! <repo>/org/example/web/2.0/web-2.0.deps.yaml   # dependencies: [org/x:1.0]
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::Coordinate;
use crate::error::{Result, config, deps};

/// Resolves declared dependencies to concrete artifact files
pub trait DependencyResolver {
    /// Resolve the full dependency graph
    ///
    /// `managed` pins win over any other version of the same key; keys in
    /// `exclusions` are never visited. The returned list may contain files
    /// that are not runtime artifacts (metadata); callers filter.
    fn resolve(
        &self,
        dependencies: &[Coordinate],
        managed: &[Coordinate],
        exclusions: &[String],
    ) -> Result<Vec<PathBuf>>;
}

/// Sidecar listing a coordinate's own dependencies
#[derive(Debug, Default, Deserialize)]
struct DependencyManifest {
    #[serde(default)]
    dependencies: Vec<Coordinate>,
}

/// A maven-layout directory of materialized artifacts
#[derive(Debug, Clone)]
pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `~/.m2/repository`, if a home directory is known
    pub fn default_location() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".m2").join("repository"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn manifest_path(&self, coordinate: &Coordinate) -> PathBuf {
        coordinate.repository_dir(&self.root).join(format!(
            "{}-{}.deps.yaml",
            coordinate.artifact, coordinate.version
        ))
    }

    fn read_manifest(path: &Path) -> Result<DependencyManifest> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;
        serde_yaml::from_str(&yaml)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))
    }
}

impl DependencyResolver for LocalRepository {
    fn resolve(
        &self,
        dependencies: &[Coordinate],
        managed: &[Coordinate],
        exclusions: &[String],
    ) -> Result<Vec<PathBuf>> {
        let pins: HashMap<String, &Coordinate> =
            managed.iter().map(|pin| (pin.key(), pin)).collect();
        let excluded: HashSet<&str> = exclusions.iter().map(String::as_str).collect();

        // Breadth first so the nearest declaration of a key wins
        let mut queue: VecDeque<Coordinate> = dependencies.iter().cloned().collect();
        let mut selected: HashSet<String> = HashSet::new();
        let mut files = Vec::new();

        while let Some(requested) = queue.pop_front() {
            let key = requested.key();
            if excluded.contains(key.as_str()) {
                log::debug!("Skipping excluded dependency {}", requested);
                continue;
            }
            if !selected.insert(key.clone()) {
                continue;
            }

            let coordinate = match pins.get(&key) {
                Some(pin) => {
                    if pin.version != requested.version {
                        log::debug!("{} pinned to {}", requested, pin.version);
                    }
                    requested.with_version(&pin.version)
                }
                None => requested,
            };

            let artifact = coordinate
                .repository_dir(&self.root)
                .join(coordinate.file_name());
            if !artifact.is_file() {
                return Err(deps::not_found(
                    coordinate.to_string(),
                    artifact.display().to_string(),
                ));
            }
            log::debug!("Resolved {} to {}", coordinate, artifact.display());
            files.push(artifact);

            let manifest_path = self.manifest_path(&coordinate);
            if manifest_path.is_file() {
                let manifest = Self::read_manifest(&manifest_path)?;
                files.push(manifest_path);
                queue.extend(manifest.dependencies);
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PackError;
    use tempfile::TempDir;

    fn install(repo: &Path, coordinate: &str, deps: &[&str]) {
        let c: Coordinate = coordinate.parse().unwrap();
        let dir = c.repository_dir(repo);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(c.file_name()), coordinate).unwrap();
        if !deps.is_empty() {
            let yaml = format!("dependencies: [{}]\n", deps.join(", "));
            std::fs::write(
                dir.join(format!("{}-{}.deps.yaml", c.artifact, c.version)),
                yaml,
            )
            .unwrap();
        }
    }

    fn coords(list: &[&str]) -> Vec<Coordinate> {
        list.iter().map(|c| c.parse().unwrap()).collect()
    }

    fn file_names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_resolve_direct_dependencies() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        install(temp.path(), "org/a:1.0", &[]);
        install(temp.path(), "org/b:2.0", &[]);

        let repo = LocalRepository::new(temp.path());
        let files = repo
            .resolve(&coords(&["org/a:1.0", "org/b:2.0"]), &[], &[])
            .unwrap();
        assert_eq!(file_names(&files), vec!["a-1.0.jar", "b-2.0.jar"]);
    }

    #[test]
    fn test_managed_pin_wins() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        install(temp.path(), "org/a:1.0", &[]);
        install(temp.path(), "org/b:2.1", &[]);

        let repo = LocalRepository::new(temp.path());
        let files = repo
            .resolve(
                &coords(&["org/a:1.0", "org/b:2.0"]),
                &coords(&["org/b:2.1"]),
                &[],
            )
            .unwrap();
        assert_eq!(file_names(&files), vec!["a-1.0.jar", "b-2.1.jar"]);
    }

    #[test]
    fn test_transitive_dependencies_include_manifest() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        install(temp.path(), "org/web:2.0", &["org/http:1.1"]);
        install(temp.path(), "org/http:1.1", &[]);

        let repo = LocalRepository::new(temp.path());
        let files = repo.resolve(&coords(&["org/web:2.0"]), &[], &[]).unwrap();
        assert_eq!(
            file_names(&files),
            vec!["web-2.0.jar", "web-2.0.deps.yaml", "http-1.1.jar"]
        );
    }

    #[test]
    fn test_nearest_version_wins() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        install(temp.path(), "org/web:2.0", &["org/log:1.0"]);
        install(temp.path(), "org/log:1.2", &[]);

        let repo = LocalRepository::new(temp.path());
        let files = repo
            .resolve(&coords(&["org/web:2.0", "org/log:1.2"]), &[], &[])
            .unwrap();
        assert!(file_names(&files).contains(&"log-1.2.jar".to_string()));
        assert!(!file_names(&files).contains(&"log-1.0.jar".to_string()));
    }

    #[test]
    fn test_exclusions_skip_transitive_dependencies() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        install(temp.path(), "org/web:2.0", &["commons-logging:1.1"]);

        let repo = LocalRepository::new(temp.path());
        let files = repo
            .resolve(
                &coords(&["org/web:2.0"]),
                &[],
                &["commons-logging/commons-logging".to_string()],
            )
            .unwrap();
        assert_eq!(file_names(&files), vec!["web-2.0.jar", "web-2.0.deps.yaml"]);
    }

    #[test]
    fn test_cycles_terminate() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        install(temp.path(), "org/a:1.0", &["org/b:1.0"]);
        install(temp.path(), "org/b:1.0", &["org/a:1.0"]);

        let repo = LocalRepository::new(temp.path());
        let files = repo.resolve(&coords(&["org/a:1.0"]), &[], &[]).unwrap();
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_missing_dependency_names_coordinate() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        let repo = LocalRepository::new(temp.path());

        let err = repo
            .resolve(&coords(&["org.example/missing:3.0"]), &[], &[])
            .unwrap_err();
        match err {
            PackError::DependencyNotFound { coordinate, .. } => {
                assert_eq!(coordinate, "org.example/missing:3.0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

//! Project descriptor (distpack.yaml)
//!
//! Describes the application being packaged: identity, dependencies,
//! profiles and the free-form settings handed to launcher templates.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{Coordinate, Profile, SettingValue, normalize_key};
use crate::error::{PackError, Result, config};

/// Descriptor file name looked up in the project root
pub const DESCRIPTOR_FILE: &str = "distpack.yaml";

/// Immutable description of the software to package
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectDescriptor {
    /// Project root; set by the loader, never read from YAML
    #[serde(skip)]
    pub root: PathBuf,

    pub name: String,

    pub version: String,

    #[serde(default)]
    pub dependencies: Vec<Coordinate>,

    /// Version pins that win over any transitively resolved version
    #[serde(default)]
    pub managed_dependencies: Vec<Coordinate>,

    #[serde(default)]
    pub exclusions: Vec<String>,

    #[serde(default)]
    pub jar_inclusions: Vec<String>,

    #[serde(default)]
    pub uberjar_inclusions: Vec<String>,

    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,

    #[serde(default)]
    pub default_profiles: Vec<String>,

    #[serde(default)]
    pub provided_profiles: Vec<String>,

    /// Profiles included in this build session; falls back to the defaults
    #[serde(default)]
    pub included_profiles: Option<Vec<String>>,

    #[serde(default)]
    pub settings: BTreeMap<String, SettingValue>,

    /// Primary artifact, relative to the root
    #[serde(default)]
    pub artifact: Option<PathBuf>,

    /// Command run in the root to produce the primary artifact
    #[serde(default)]
    pub build_command: Option<Vec<String>>,

    /// Extra directories searched for launcher resources
    #[serde(default)]
    pub launcher_path: Vec<PathBuf>,
}

impl ProjectDescriptor {
    /// Load `distpack.yaml` from a project root
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(DESCRIPTOR_FILE);
        if !path.is_file() {
            return Err(config::not_found(path.display().to_string()));
        }

        let yaml = std::fs::read_to_string(&path)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;

        let descriptor = Self::from_yaml(&yaml, root).map_err(|e| match e {
            PackError::ConfigParseFailed { reason, .. } => {
                config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })?;

        log::debug!(
            "Loaded {} {} from {}",
            descriptor.name,
            descriptor.version,
            path.display()
        );
        Ok(descriptor)
    }

    /// Parse a descriptor from YAML, rooted at `root`
    pub fn from_yaml(yaml: &str, root: &Path) -> Result<Self> {
        let mut descriptor: Self = serde_yaml::from_str(yaml)?;
        descriptor.root = root.to_path_buf();
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Validate descriptor contents and normalize exclusion keys
    pub fn validate(&mut self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(config::invalid("'name' cannot be empty"));
        }
        if self.version.trim().is_empty() {
            return Err(config::invalid("'version' cannot be empty"));
        }
        if let Some(command) = &self.build_command {
            if command.is_empty() {
                return Err(config::invalid("'build-command' cannot be an empty list"));
            }
        }

        self.exclusions = self
            .exclusions
            .iter()
            .map(|key| normalize_key(key))
            .collect::<Result<_>>()?;
        for (name, profile) in &mut self.profiles {
            profile.exclusions = profile
                .exclusions
                .iter()
                .map(|key| normalize_key(key))
                .collect::<Result<_>>()
                .map_err(|e| config::invalid(format!("profile '{}': {}", name, e)))?;
        }

        Ok(())
    }

    /// Profiles currently included in the build
    pub fn included_profiles(&self) -> &[String] {
        self.included_profiles
            .as_deref()
            .unwrap_or(self.default_profiles.as_slice())
    }

    /// Location of the primary artifact
    pub fn primary_artifact_path(&self) -> PathBuf {
        match &self.artifact {
            Some(path) => self.root.join(path),
            None => self
                .root
                .join("target")
                .join(format!("{}-{}.jar", self.name, self.version)),
        }
    }

    /// Extension that identifies runtime artifacts, taken from the primary artifact
    pub fn packaging_extension(&self) -> String {
        self.primary_artifact_path()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or(super::coordinate::DEFAULT_EXTENSION)
            .to_string()
    }
}

//! Dependency coordinates
//!
//! A coordinate in distpack.yaml: `group/artifact:version`, optionally
//! followed by `@extension` for artifacts not packaged as jars.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result, config::invalid_coordinate};

/// Extension used when a coordinate does not name one
pub const DEFAULT_EXTENSION: &str = "jar";

/// A fully specified dependency coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub extension: String,
}

impl Coordinate {
    /// Create a jar coordinate
    #[cfg(test)]
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Version-less identity, `group/artifact`
    pub fn key(&self) -> String {
        format!("{}/{}", self.group, self.artifact)
    }

    /// File name of the artifact in a repository
    pub fn file_name(&self) -> String {
        format!("{}-{}.{}", self.artifact, self.version, self.extension)
    }

    /// Directory holding this version in a maven-layout repository
    pub fn repository_dir(&self, repository: &Path) -> PathBuf {
        let mut dir = repository.to_path_buf();
        for part in self.group.split('.') {
            dir.push(part);
        }
        dir.join(&self.artifact).join(&self.version)
    }

    /// Same coordinate with another version
    pub fn with_version(&self, version: &str) -> Self {
        Self {
            version: version.to_string(),
            ..self.clone()
        }
    }
}

/// Normalize a `group/artifact` or bare `artifact` key
///
/// A bare artifact name stands for `artifact/artifact`.
pub fn normalize_key(input: &str) -> Result<String> {
    let input = input.trim();
    let (group, artifact) = split_group_artifact(input)?;
    Ok(format!("{}/{}", group, artifact))
}

fn split_group_artifact(input: &str) -> Result<(&str, &str)> {
    let (group, artifact) = match input.split_once('/') {
        Some((group, artifact)) => (group, artifact),
        None => (input, input),
    };

    if group.is_empty() || artifact.is_empty() {
        return Err(invalid_coordinate(input, "empty group or artifact"));
    }
    if artifact.contains('/') {
        return Err(invalid_coordinate(input, "more than one '/'"));
    }
    if input.chars().any(char::is_whitespace) {
        return Err(invalid_coordinate(input, "contains whitespace"));
    }

    Ok((group, artifact))
}

impl FromStr for Coordinate {
    type Err = PackError;

    fn from_str(input: &str) -> Result<Self> {
        let input = input.trim();

        let (rest, extension) = match input.rsplit_once('@') {
            Some((rest, ext)) if !ext.is_empty() => (rest, ext),
            Some(_) => return Err(invalid_coordinate(input, "empty extension after '@'")),
            None => (input, DEFAULT_EXTENSION),
        };

        let (name, version) = rest
            .split_once(':')
            .ok_or_else(|| invalid_coordinate(input, "missing version"))?;
        if version.is_empty() || version.contains(':') {
            return Err(invalid_coordinate(input, "version must follow a single ':'"));
        }

        let (group, artifact) = split_group_artifact(name)?;

        Ok(Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: version.to_string(),
            extension: extension.to_string(),
        })
    }
}

impl TryFrom<String> for Coordinate {
    type Error = PackError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Coordinate> for String {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.group, self.artifact, self.version)?;
        if self.extension != DEFAULT_EXTENSION {
            write!(f, "@{}", self.extension)?;
        }
        Ok(())
    }
}

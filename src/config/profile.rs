//! Build profiles and their directives
//!
//! A profile is written in distpack.yaml as a struct of lists and is
//! flattened into an ordered [`Directive`] sequence when merged.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use super::Coordinate;

/// A free-form setting value consumed by launcher templates
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    List(Vec<String>),
    Text(String),
    Number(i64),
    Flag(bool),
}

impl SettingValue {
    /// Render for template substitution; lists are joined with single spaces
    pub fn render(&self) -> String {
        match self {
            SettingValue::List(items) => items.join(" "),
            SettingValue::Text(text) => text.clone(),
            SettingValue::Number(n) => n.to_string(),
            SettingValue::Flag(b) => b.to_string(),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A named set of build directives
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Profile {
    #[serde(default)]
    pub dependencies: Vec<Coordinate>,

    #[serde(default)]
    pub managed_dependencies: Vec<Coordinate>,

    /// `group/artifact` keys to drop from resolution
    #[serde(default)]
    pub exclusions: Vec<String>,

    #[serde(default)]
    pub jar_inclusions: Vec<String>,

    #[serde(default)]
    pub uberjar_inclusions: Vec<String>,

    #[serde(default)]
    pub settings: BTreeMap<String, SettingValue>,
}

/// One effect a profile has on the descriptor it is merged into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    AddDependency(Coordinate),
    ManageDependency(Coordinate),
    Exclude(String),
    IncludeInJar(String),
    IncludeInUberjar(String),
    SetSetting(String, SettingValue),
}

impl Profile {
    /// Flatten into directives, in field declaration order
    pub fn directives(&self) -> Vec<Directive> {
        let mut directives = Vec::new();

        directives.extend(
            self.dependencies
                .iter()
                .cloned()
                .map(Directive::AddDependency),
        );
        directives.extend(
            self.managed_dependencies
                .iter()
                .cloned()
                .map(Directive::ManageDependency),
        );
        directives.extend(self.exclusions.iter().cloned().map(Directive::Exclude));
        directives.extend(
            self.jar_inclusions
                .iter()
                .cloned()
                .map(Directive::IncludeInJar),
        );
        directives.extend(
            self.uberjar_inclusions
                .iter()
                .cloned()
                .map(Directive::IncludeInUberjar),
        );
        directives.extend(
            self.settings
                .iter()
                .map(|(k, v)| Directive::SetSetting(k.clone(), v.clone())),
        );

        directives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_value_render() {
        assert_eq!(SettingValue::Number(8080).render(), "8080");
        assert_eq!(
            SettingValue::List(vec!["-Xmx1g".into(), "-server".into()]).render(),
            "-Xmx1g -server"
        );
        assert_eq!(SettingValue::Flag(true).render(), "true");
    }

    #[test]
    fn test_setting_values_from_yaml() {
        let settings: BTreeMap<String, SettingValue> =
            serde_yaml::from_str("port: 9090\njvm-opts: [-Xmx1g]\nagent: yourkit\n").unwrap();
        assert_eq!(settings["port"], SettingValue::Number(9090));
        assert_eq!(settings["jvm-opts"], SettingValue::List(vec!["-Xmx1g".into()]));
        assert_eq!(settings["agent"], SettingValue::Text("yourkit".into()));
    }

    #[test]
    fn test_directives_order() {
        let profile: Profile = serde_yaml::from_str(
            "dependencies: [org/a:1.0]\n\
             exclusions: [org/b]\n\
             uberjar-inclusions: ['^META-INF/.*']\n\
             settings: {port: 1}\n",
        )
        .unwrap();

        let directives = profile.directives();
        assert_eq!(directives.len(), 4);
        assert!(matches!(directives[0], Directive::AddDependency(_)));
        assert_eq!(directives[1], Directive::Exclude("org/b".to_string()));
        assert!(matches!(directives[2], Directive::IncludeInUberjar(_)));
        assert!(matches!(directives[3], Directive::SetSetting(_, _)));
    }

    #[test]
    fn test_empty_profile() {
        let profile: Profile = serde_yaml::from_str("{}").unwrap();
        assert!(profile.directives().is_empty());
    }
}

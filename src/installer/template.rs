//! Resource templating
//!
//! Plain text substitution, not a template language: every `{{key}}` and
//! `@@key@@` whose key is in the context is replaced by its value. Anything
//! else, including placeholders with unknown keys, passes through verbatim.

use std::collections::BTreeMap;

use crate::config::ProjectDescriptor;

/// Variables available to launcher templates
///
/// Iteration (and therefore substitution) order is the key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    values: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a descriptor: its settings plus `name`, `version`, `artifact`
    ///
    /// Settings are inserted last, so a setting may override the built-ins.
    pub fn from_project(project: &ProjectDescriptor) -> Self {
        let mut context = Self::new();
        context.insert("name", &project.name);
        context.insert("version", &project.version);
        if let Some(artifact) = project
            .primary_artifact_path()
            .file_name()
            .and_then(|name| name.to_str())
        {
            context.insert("artifact", artifact);
        }
        for (key, value) in &project.settings {
            context.insert(key, value.render());
        }
        context
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Substitute every context key into `text`, in both delimiter styles
pub fn render(text: &str, context: &TemplateContext) -> String {
    let mut rendered = text.to_string();
    for (key, value) in context.iter() {
        for placeholder in [format!("{{{{{}}}}}", key), format!("@@{}@@", key)] {
            if rendered.contains(&placeholder) {
                rendered = rendered.replace(&placeholder, value);
            }
        }
    }
    rendered
}

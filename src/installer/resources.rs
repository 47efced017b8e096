//! Launcher resource lookup
//!
//! The installer never reaches for a global search path; it is handed a
//! [`ResourceProvider`] that answers by name.

use std::borrow::Cow;
use std::path::PathBuf;

/// Looks up named launcher resources
pub trait ResourceProvider {
    /// Contents of `name`, or `None` when this provider has no such resource
    fn lookup(&self, name: &str) -> Option<Cow<'static, [u8]>>;
}

/// Resources compiled into the binary
const EMBEDDED: &[(&str, &[u8])] = &[
    (
        "logback.xml",
        include_bytes!("../../resources/launcher/logback.xml"),
    ),
    ("start.sh", include_bytes!("../../resources/launcher/start.sh")),
    ("stop.sh", include_bytes!("../../resources/launcher/stop.sh")),
    ("h2.sh", include_bytes!("../../resources/launcher/h2.sh")),
];

/// The launcher resources shipped with distpack
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl ResourceProvider for EmbeddedResources {
    fn lookup(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        EMBEDDED
            .iter()
            .find(|(embedded, _)| *embedded == name)
            .map(|(_, bytes)| Cow::Borrowed(*bytes))
    }
}

/// Resources read from an ordered list of directories
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new(dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            dirs: dirs.into_iter().collect(),
        }
    }
}

impl ResourceProvider for SearchPath {
    fn lookup(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        self.dirs.iter().find_map(|dir| {
            let candidate = dir.join(name);
            if !candidate.is_file() {
                return None;
            }
            match std::fs::read(&candidate) {
                Ok(bytes) => Some(Cow::Owned(bytes)),
                Err(e) => {
                    log::warn!("Cannot read {}: {}", candidate.display(), e);
                    None
                }
            }
        })
    }
}

/// Providers consulted in order; the first one that has a name wins
#[derive(Default)]
pub struct Layered {
    providers: Vec<Box<dyn ResourceProvider>>,
}

impl Layered {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, provider: impl ResourceProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

impl ResourceProvider for Layered {
    fn lookup(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        self.providers
            .iter()
            .find_map(|provider| provider.lookup(name))
    }
}

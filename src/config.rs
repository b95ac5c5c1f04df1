//! Configuration for assetfs.
//!
//! The embedded-vs-local choice is made per call through [`Mode`](crate::Mode).
//! The only process-wide setting is where local mode looks for files; set it
//! with [`ConfigBuilder`] at application startup.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Global configuration, initialized via [`ConfigBuilder::init`].
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Runtime configuration for assetfs.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Base directory for relative local paths in local mode.
    /// `None` resolves against the process working directory.
    pub local_root: Option<PathBuf>,
}

impl Config {
    /// Base directory for relative local paths, if one is configured.
    pub fn local_root(&self) -> Option<&Path> {
        self.local_root.as_deref()
    }
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    local_root: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory local paths are resolved against.
    ///
    /// # Example
    ///
    /// ```
    /// use assetfs::config::ConfigBuilder;
    ///
    /// ConfigBuilder::new()
    ///     .local_root("frontend")
    ///     .init();
    /// ```
    pub fn local_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.local_root = Some(root.into());
        self
    }

    /// Build and initialize the global configuration.
    ///
    /// This can only be called once. Subsequent calls are ignored.
    /// Returns `true` if configuration was set, `false` if already initialized.
    pub fn init(self) -> bool {
        let config = Config {
            local_root: self.local_root,
        };
        CONFIG.set(config).is_ok()
    }
}

/// Initialize assetfs with default configuration.
///
/// This is equivalent to `ConfigBuilder::new().init()`.
pub fn init_default() -> bool {
    ConfigBuilder::new().init()
}

/// Get the current configuration, or default if not initialized.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

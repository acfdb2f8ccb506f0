//! Updater configuration.

/// Key of the entry list when none is configured.
pub const DEFAULT_LIST_KEY: &str = "mcpRepos";

/// Configuration for a single update.
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    /// Top-level key of the entry list.
    list_key: String,
    /// Whether to skip writing the updated document.
    dry_run: bool,
}

impl UpdaterConfig {
    /// Creates a configuration for the given list key.
    pub fn new(list_key: impl Into<String>) -> Self {
        Self {
            list_key: list_key.into(),
            dry_run: false,
        }
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the key of the entry list.
    pub fn list_key(&self) -> &str {
        &self.list_key
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_KEY)
    }
}

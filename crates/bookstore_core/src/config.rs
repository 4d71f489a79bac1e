//! Catalog configuration.

/// Configuration for how a catalog persists itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether to write indented JSON instead of a single line.
    pub pretty: bool,

    /// Whether to `fsync` the snapshot before it replaces the old file.
    pub sync_on_write: bool,

    /// Whether to create missing parent directories when syncing.
    pub create_dirs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty: false,
            sync_on_write: true,
            create_dirs: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to write indented JSON.
    #[must_use]
    pub const fn pretty(mut self, value: bool) -> Self {
        self.pretty = value;
        self
    }

    /// Sets whether to `fsync` on every sync.
    #[must_use]
    pub const fn sync_on_write(mut self, value: bool) -> Self {
        self.sync_on_write = value;
        self
    }

    /// Sets whether to create missing parent directories.
    #[must_use]
    pub const fn create_dirs(mut self, value: bool) -> Self {
        self.create_dirs = value;
        self
    }
}

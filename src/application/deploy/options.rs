//! Deploy Options
//!
//! Configuration types for deploy operations.

use crate::domain::ports::IncrementalOptions;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Track persisted apply state and skip already-applied nodes
    pub incremental: bool,
    /// Engine configuration used when `incremental` is set
    pub incremental_options: IncrementalOptions,
    /// Restore the engine's default mode when the run ends, on success and
    /// failure alike. Clearing this keeps incremental mode armed for
    /// subsequent runs on the same engine.
    pub restore_default_mode: bool,
}

impl DeployOptions {
    pub fn new() -> Self {
        Self {
            incremental: false,
            incremental_options: IncrementalOptions::default(),
            restore_default_mode: true,
        }
    }

    pub fn with_incremental(mut self, incremental: bool) -> Self {
        self.incremental = incremental;
        self
    }

    pub fn with_incremental_options(mut self, options: IncrementalOptions) -> Self {
        self.incremental_options = options;
        self
    }

    pub fn with_restore_default_mode(mut self, restore: bool) -> Self {
        self.restore_default_mode = restore;
        self
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::new()
    }
}

//! Serializer configuration.

use irlin_core::Colors;

/// Deepest tree nesting accepted before a run aborts.
pub const DEFAULT_MAX_DEPTH: u32 = 1024;

/// Configuration for one serialization run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Keep revisited and skipped instructions as comments
    pub(crate) debug: bool,
    /// Traversal depth limit (roots are at depth 0)
    pub(crate) max_depth: u32,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            max_depth: DEFAULT_MAX_DEPTH,
            colors: Colors::OFF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set debug mode.
    pub fn debug(mut self, value: bool) -> Self {
        self.debug = value;
        self
    }

    /// Set the traversal depth limit.
    pub fn max_depth(mut self, value: u32) -> Self {
        self.max_depth = value;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn depth_limit(&self) -> u32 {
        self.max_depth
    }

    pub fn colors(&self) -> Colors {
        self.colors
    }
}

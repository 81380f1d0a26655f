//! Resolver settings

/// Knobs for a resolution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverSettings {
    max_configure_depth: usize,
}

impl ResolverSettings {
    /// The nesting depth allowed by default
    pub const DEFAULT_MAX_CONFIGURE_DEPTH: usize = 64;

    /// Creates the default settings
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_configure_depth: Self::DEFAULT_MAX_CONFIGURE_DEPTH,
        }
    }

    /// Sets how deeply configure blocks may nest
    ///
    /// The top-level block does not count. With a limit of `1`, a configure
    /// block is accepted at the top level but not inside another one.
    #[must_use]
    pub const fn with_max_configure_depth(mut self, max_configure_depth: usize) -> Self {
        self.max_configure_depth = max_configure_depth;
        self
    }

    /// Returns how deeply configure blocks may nest
    #[must_use]
    pub const fn max_configure_depth(&self) -> usize {
        self.max_configure_depth
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self::new()
    }
}

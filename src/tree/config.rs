//! Configuration types for the directory walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Deepest level whose contents are listed. The root is depth 0, so
    /// `Some(0)` lists only the root's immediate children.
    pub max_depth: Option<usize>,
}

impl WalkerConfig {
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    /// Check if a directory at `depth` is past the configured limit
    pub fn beyond_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}

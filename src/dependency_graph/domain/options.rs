use super::PackageName;

/// Default maximum depth when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Bounds shared by the order analysis and the tree traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Nodes deeper than this are never emitted; the start node is depth 0
    pub max_depth: usize,
    /// Edges whose target contains this substring are dropped
    pub ignore: Option<String>,
}

impl AnalysisOptions {
    pub fn new(max_depth: usize, ignore: Option<String>) -> Self {
        // an empty substring would match every name
        let ignore = ignore.filter(|s| !s.is_empty());
        Self { max_depth, ignore }
    }

    pub fn is_ignored(&self, name: &PackageName) -> bool {
        self.ignore
            .as_deref()
            .is_some_and(|needle| name.contains(needle))
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, None)
    }
}

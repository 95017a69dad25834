use dep_visualizer::prelude::*;
use std::path::Path;

/// Mock GraphFileReader serving graph text from memory
pub struct MockGraphReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockGraphReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl GraphFileReader for MockGraphReader {
    fn read_graph_file(&self, path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock graph reader failure for {}", path.display());
        }
        Ok(self.content.clone())
    }
}

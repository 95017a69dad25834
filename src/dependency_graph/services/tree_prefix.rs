use crate::dependency_graph::domain::TraversalEntry;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Builds box-drawing prefixes for a pre-order entry stream.
///
/// Only one flag per open level is kept, so memory grows with depth rather
/// than with the number of entries.
#[derive(Debug, Default)]
pub struct TreePrefix {
    columns: Vec<bool>,
}

impl TreePrefix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rendered line for the next entry in pre-order
    pub fn line(&mut self, entry: &TraversalEntry) -> String {
        if entry.depth == 0 {
            self.columns.clear();
            return entry.label();
        }

        self.columns.truncate(entry.depth - 1);
        let mut line = String::with_capacity(4 * entry.depth + entry.name.as_str().len());
        for &ancestor_is_last in &self.columns {
            line.push_str(if ancestor_is_last { SPACE } else { PIPE });
        }
        line.push_str(if entry.is_last { LAST_BRANCH } else { BRANCH });
        line.push_str(&entry.label());

        self.columns.push(entry.is_last);
        line
    }
}

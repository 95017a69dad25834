use crate::dependency_graph::domain::{DependencyGraph, PackageName};

/// GraphFileParser turns `name: dep1 dep2` text into a DependencyGraph
///
/// Rules:
/// - the name ends at the first `:`; dependencies are whitespace separated
/// - `name:` with nothing after it declares a confirmed leaf
/// - a line without `:` also declares a leaf
/// - blank lines and lines starting with `#` are skipped
/// - a later line for the same name replaces the earlier one
pub struct GraphFileParser;

impl GraphFileParser {
    pub fn parse(content: &str) -> DependencyGraph {
        let mut graph = DependencyGraph::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (name, deps) = match line.split_once(':') {
                Some((name, deps)) => (name.trim(), deps),
                None => {
                    tracing::debug!(line = index + 1, "graph line without ':' treated as leaf");
                    (line, "")
                }
            };

            if name.is_empty() {
                tracing::warn!(line = index + 1, "skipping graph line with empty package name");
                continue;
            }

            let dependencies = deps.split_whitespace().map(PackageName::new).collect();
            graph.insert(PackageName::new(name), dependencies);
        }

        graph
    }
}

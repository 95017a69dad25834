use crate::dependency_graph::domain::DependencyGraph;
use crate::dependency_graph::services::GraphFileParser;
use crate::shared::Result;
use std::path::Path;

/// GraphFileReader port for loading a dependency graph from a text file
///
/// The file holds one `name: dep1 dep2` line per package.
pub trait GraphFileReader {
    /// Reads the raw content of the graph file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist, is a directory or a symbolic link
    /// - The file cannot be read due to permissions or I/O errors
    fn read_graph_file(&self, path: &Path) -> Result<String>;

    /// Reads the graph file and parses it into a DependencyGraph
    fn read_and_parse_graph(&self, path: &Path) -> Result<DependencyGraph> {
        let content = self.read_graph_file(path)?;
        Ok(GraphFileParser::parse(&content))
    }
}

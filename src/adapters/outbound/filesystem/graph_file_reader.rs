use crate::ports::outbound::GraphFileReader;
use crate::shared::error::DepVizError;
use crate::shared::security::validate_graph_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemGraphReader adapter for reading graph files from disk
///
/// This adapter implements the GraphFileReader port. Reads are rejected
/// for symbolic links, directories and oversized files.
pub struct FileSystemGraphReader;

impl FileSystemGraphReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemGraphReader {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFileReader for FileSystemGraphReader {
    fn read_graph_file(&self, path: &Path) -> Result<String> {
        validate_graph_file(path)?;

        fs::read_to_string(path).map_err(|e| {
            DepVizError::GraphFileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_graph_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.txt");
        fs::write(&path, "A: B\nB:\n").unwrap();

        let reader = FileSystemGraphReader::new();
        let content = reader.read_graph_file(&path).unwrap();

        assert_eq!(content, "A: B\nB:\n");
    }

    #[test]
    fn test_read_and_parse_graph() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.txt");
        fs::write(&path, "A: B C\nB:\n").unwrap();

        let graph = FileSystemGraphReader::new().read_and_parse_graph(&path).unwrap();

        assert_eq!(graph.package_count(), 2);
        assert!(graph.contains("A"));
    }

    #[test]
    fn test_read_graph_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let result = FileSystemGraphReader::new().read_graph_file(&path);

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepVizError>(),
            Some(DepVizError::GraphFileNotFound { .. })
        ));
    }

    #[test]
    fn test_read_graph_file_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result = FileSystemGraphReader::new().read_graph_file(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("not a directory"));
    }
}

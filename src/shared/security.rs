use crate::shared::error::DepVizError;
use crate::shared::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Maximum graph file size (10 MB)
pub const MAX_GRAPH_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validates a graph file passed with `--repo-path` before it is read.
///
/// Rejects missing paths, symbolic links, directories and files larger
/// than [`MAX_GRAPH_FILE_SIZE`]. All failures are configuration errors.
pub fn validate_graph_file(path: &Path) -> Result<()> {
    // symlink_metadata so a link is inspected itself, not its target
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(DepVizError::GraphFileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        Err(e) => {
            return Err(DepVizError::InvalidArgument {
                name: "--repo-path".to_string(),
                reason: format!("cannot access {}: {}", path.display(), e),
            }
            .into());
        }
    };

    if metadata.is_symlink() {
        return Err(DepVizError::SecurityError {
            path: path.to_path_buf(),
            reason: "Graph file is a symbolic link".to_string(),
            hint: "Pass the path of the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(DepVizError::InvalidArgument {
            name: "--repo-path".to_string(),
            reason: format!("{} must point to a file, not a directory", path.display()),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_GRAPH_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(DepVizError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the graph into smaller files".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Checks a report destination: its directory must exist and an existing
/// file there must not be a symbolic link.
pub fn validate_output_path(path: &Path) -> Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent.filter(|p| !p.is_dir()) {
        return Err(DepVizError::FileWriteError {
            path: path.to_path_buf(),
            details: format!("Parent directory does not exist: {}", parent.display()),
        }
        .into());
    }

    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(DepVizError::FileWriteError {
                path: path.to_path_buf(),
                details: "Security: Output path is a symbolic link. Writing to symbolic links is not allowed.".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

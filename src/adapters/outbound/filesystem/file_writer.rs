use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DepVizError;
use crate::shared::security::validate_output_path;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Writes the report to the `--output` file
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        validate_output_path(&self.output_path)?;

        fs::write(&self.output_path, content).map_err(|e| DepVizError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        eprintln!("✅ Output written to {}", self.output_path.display());
        Ok(())
    }
}

/// Writes the report to stdout, the default destination
#[derive(Default)]
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write the report to stdout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_writes_report_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("tree.txt");
        let report = "Dependency tree for 'A' (file mode):\nA\n└── B\n";

        FileSystemWriter::new(output_path.clone())
            .present(report)
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), report);
    }

    #[test]
    fn test_file_writer_replaces_previous_report() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("order.txt");
        fs::write(&output_path, "stale report that is longer than the new one").unwrap();

        FileSystemWriter::new(output_path.clone())
            .present("fresh\n")
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_file_writer_missing_directory() {
        let err = FileSystemWriter::new(PathBuf::from("/nonexistent/directory/tree.txt"))
            .present("A\n")
            .unwrap_err();

        let dep_err = err.downcast_ref::<DepVizError>().unwrap();
        assert!(matches!(dep_err, DepVizError::FileWriteError { .. }));
        assert!(!dep_err.is_configuration_error());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_leaves_symlink_target_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        fs::write(&target, "original").unwrap();
        let link = temp_dir.path().join("link.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(FileSystemWriter::new(link).present("overwrite").is_err());
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
    }

    #[test]
    fn test_stdout_presenter_writes() {
        assert!(StdoutPresenter::new().present("A\n").is_ok());
    }
}
